//! Markup templates for the card container.
//!
//! Template names end in `.html` so minijinja escapes every interpolated value.

pub const CARD_TEMPLATE: &str = r#"<div class="{{ classes }}" data-id="{{ id }}">
  <img src="{{ cover }}" alt="{{ title }}" loading="lazy" decoding="async">
  <div class="card-content">
    <span class="badge {{ badge }}">{{ category }}</span>
    <h3 class="accordion-title">{{ title }}</h3>
    <p><strong>{{ genre }}</strong> - {{ year }}</p>
    <p>{{ description }}</p>
    <div class="extra"{% if detail_height %} style="max-height: {{ detail_height }}px"{% endif %}>
      <p><strong>{{ type_caption }}</strong> {{ kind }}</p>
      <p><strong>{{ price_caption }}</strong> {{ price_label }}</p>
      <p>{{ content }}</p>
    </div>
    <div class="card-footer">
      <button class="download">{{ action_label }}</button>
      {%- if play_label %}
      <button class="play">{{ play_label }}</button>
      {%- endif %}
    </div>
  </div>
</div>
"#;

pub const NO_RESULTS_TEMPLATE: &str = r#"<p class="no-results">{{ message }}</p>"#;

pub const LOAD_FAILURE_TEMPLATE: &str = r#"<p class="error-message">{{ message }}</p>"#;

pub const LOADING_TEMPLATE: &str = r#"<p class="loading">{{ message }}</p>"#;

pub const CARD: &str = "card.html";
pub const NO_RESULTS: &str = "no_results.html";
pub const LOAD_FAILURE: &str = "load_failure.html";
pub const LOADING: &str = "loading.html";
