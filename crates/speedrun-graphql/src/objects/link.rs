use async_graphql::SimpleObject;
use speedrun::types as wire;

#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
pub struct Link {
    pub rel: Option<String>,
    pub uri: String,
}

impl From<&speedrun::Link> for Link {
    fn from(link: &speedrun::Link) -> Self {
        Link {
            rel: link.rel.clone().filter(|rel| !rel.is_empty()),
            uri: link.uri.clone(),
        }
    }
}

/// A name color, with one value per site theme.
#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub light: String,
    pub dark: String,
}

impl From<&wire::Color> for Color {
    fn from(color: &wire::Color) -> Self {
        Color {
            light: color.light.clone(),
            dark: color.dark.clone(),
        }
    }
}
