//! Minijinja templates for terminal output.
//!
//! Rendered with `trim_blocks`, `lstrip_blocks` and `keep_trailing_newline`,
//! so block tags on their own line leave no trace in the output.

pub const CARD_TEMPLATE: &str = r##"  {{ c.title | style("title") }}  {{ ("#" ~ c.id) | style("id") }}
    {{ c.author_line | style("meta") }}
    {{ c.year_line | style("meta") }}
    [{{ c.toggle_label | style("action_" ~ c.toggle_style) }}] [{{ c.edit_label | style("action") }}] [{{ c.delete_label | style("danger") }}]
"##;

pub const SHELF_TEMPLATE: &str = r#"{% for shelf in shelves %}
{% if not loop.first %}

{% endif %}
{{ shelf.heading | style("header") }} {{ ("(" ~ shelf.cards | length ~ ")") | style("count") }}
{% for c in shelf.cards %}
{% include "card" %}
{% else %}
  {{ empty_message | style("empty") }}
{% endfor %}
{% endfor %}
"#;

pub const SEARCH_TEMPLATE: &str = r#"{{ rule | style("rule") }}
{{ heading | style("header") }}
{{ rule | style("rule") }}
{% for c in cards %}
{% include "card" %}
{% else %}
  {{ placeholder | style("empty") }}
{% endfor %}
{{ rule | style("rule") }}
"#;

pub const MESSAGES_TEMPLATE: &str = r#"{% for m in messages %}
{{ m.content | style(m.style) }}
{% endfor %}
"#;

pub const CONFIG_TEMPLATE: &str = r#"{% for e in entries %}
{{ e.key | style("meta") }} = {{ e.value }}
{% endfor %}
"#;
