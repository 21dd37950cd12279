use serde::{Deserialize, Serialize};

/// One colorway of a product, with its own stock counter and display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorEntry {
    pub color: String,
    pub stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hexcode: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl ColorEntry {
    pub fn new(color: impl Into<String>, stock: u32) -> Self {
        Self {
            color: color.into(),
            stock,
            hexcode: None,
            images: Vec::new(),
        }
    }

    pub fn with_hexcode(mut self, hexcode: impl Into<String>) -> Self {
        self.hexcode = Some(hexcode.into());
        self
    }

    pub fn with_images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }
}

/// One size label of a product, with its own stock counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeEntry {
    pub size: String,
    pub stock: u32,
}

impl SizeEntry {
    pub fn new(size: impl Into<String>, stock: u32) -> Self {
        Self {
            size: size.into(),
            stock,
        }
    }
}
