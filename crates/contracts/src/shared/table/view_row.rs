/// Display-ready projection of one record.
///
/// Cell contents are plain text. The view layer binds them as text nodes
/// and attribute values, so markup characters in a value are never
/// interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRow {
    /// Record id, used as the list key and the checkbox value.
    pub key: u32,
    pub cells: Vec<ViewCell>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCell {
    Text(String),
    /// Emphasised text, e.g. a price.
    Strong(String),
    Image { src: String, alt: String },
    /// Picture plus a bold title and optional muted subtitle.
    Identity {
        image: String,
        title: String,
        subtitle: Option<String>,
        round: bool,
    },
    /// Link-styled label without a target.
    Action(String),
}

impl ViewCell {
    pub fn text(value: impl ToString) -> Self {
        ViewCell::Text(value.to_string())
    }

    /// Flattened cell text for assertions on rendered rows.
    #[cfg(test)]
    pub fn plain_text(&self) -> String {
        match self {
            ViewCell::Text(s) | ViewCell::Strong(s) | ViewCell::Action(s) => s.clone(),
            ViewCell::Image { alt, .. } => alt.clone(),
            ViewCell::Identity { title, subtitle, .. } => match subtitle {
                Some(sub) => format!("{} {}", title, sub),
                None => title.clone(),
            },
        }
    }
}

pub fn render_rows<R>(items: &[&R], render: fn(&R) -> ViewRow) -> Vec<ViewRow> {
    items.iter().map(|item| render(item)).collect()
}
