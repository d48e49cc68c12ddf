//! Terminal templates.
//!
//! Layout math (widths, wrapping) happens in Rust before rendering; the
//! templates only place pre-computed strings and pick styles. Every line
//! break is explicit so whitespace never depends on tag placement.

pub const CARD_TEMPLATE: &str = concat!(
    "{{ position | style(\"position\") }} {{ title | style(\"title\") }}  ",
    "{{ badge | style(badge_style) }}\n",
    "{% if meta %}   {{ meta | style(\"meta\") }}\n{% endif %}",
    "{% for line in description %}   {{ line }}\n{% endfor %}",
    "   {{ price | style(price_style) }}  {{ action | style(\"action\") }}",
    "{% if play %}  {{ play | style(\"action\") }}{% endif %}\n",
    "{% for line in detail %}   {{ line | style(\"detail\") }}\n{% endfor %}",
);

pub const FACETS_TEMPLATE: &str = concat!(
    "{% for facet in facets %}",
    "{{ facet.name | style(\"heading\") }}: {{ facet.values }}\n",
    "{% endfor %}",
);
