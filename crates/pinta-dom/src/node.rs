//! Tree nodes and element data.

use crate::NodeId;

/// A node in the arena tree.
///
/// Sibling and child links are [`NodeId`]s rather than pointers, which
/// keeps the node `Copy`-free but compact and lets the whole page be
/// dropped in one shot when the next page mounts.
#[derive(Debug)]
pub struct Node {
    /// Parent node (NONE if root).
    pub parent: NodeId,
    /// First child.
    pub first_child: NodeId,
    /// Last child (for O(1) append).
    pub last_child: NodeId,
    /// Previous sibling.
    pub prev_sibling: NodeId,
    /// Next sibling.
    pub next_sibling: NodeId,
    /// Node-specific data.
    pub data: NodeData,
}

impl Node {
    pub(crate) fn new(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    /// Check if this is an element.
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Get element data if this is an element.
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data.
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node.
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// Node-specific data.
#[derive(Debug)]
pub enum NodeData {
    /// Arena root, parent of the `<svg>` element.
    Root,
    /// Element.
    Element(ElementData),
    /// Text content.
    Text(String),
}

/// Element kind, derived from the tag name once at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Svg,
    Group,
    Path,
    Rect,
    Circle,
    Ellipse,
    Line,
    Polyline,
    Polygon,
    Text,
    Tspan,
    Other,
}

impl ElementKind {
    /// Classify a tag name (already lowercased by the parser).
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "svg" => Self::Svg,
            "g" => Self::Group,
            "path" => Self::Path,
            "rect" => Self::Rect,
            "circle" => Self::Circle,
            "ellipse" => Self::Ellipse,
            "line" => Self::Line,
            "polyline" => Self::Polyline,
            "polygon" => Self::Polygon,
            "text" => Self::Text,
            "tspan" => Self::Tspan,
            _ => Self::Other,
        }
    }

    /// Text-carrying kinds, protected from accidental fills.
    pub fn is_text_like(self) -> bool {
        matches!(self, Self::Text | Self::Tspan)
    }

    /// Kinds that draw geometry.
    pub fn is_shape(self) -> bool {
        matches!(
            self,
            Self::Path
                | Self::Rect
                | Self::Circle
                | Self::Ellipse
                | Self::Line
                | Self::Polyline
                | Self::Polygon
        )
    }
}

/// Element-specific data.
#[derive(Debug)]
pub struct ElementData {
    /// Tag name as written in the source.
    pub name: String,
    /// Kind derived from the tag name.
    pub kind: ElementKind,
    /// Attributes in source order.
    pub attrs: Vec<Attribute>,
}

impl ElementData {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let kind = ElementKind::from_tag(&name);
        Self {
            name,
            kind,
            attrs: Vec::new(),
        }
    }

    /// Get an attribute value.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// True when the attribute is present (even if empty).
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|a| a.name == name)
    }

    /// Set an attribute, replacing an existing value.
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        for attr in &mut self.attrs {
            if attr.name == name {
                attr.value = value;
                return;
            }
        }
        self.attrs.push(Attribute {
            name: name.to_string(),
            value,
        });
    }

    /// Remove an attribute, returning its previous value.
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let pos = self.attrs.iter().position(|a| a.name == name)?;
        Some(self.attrs.remove(pos).value)
    }
}

/// Attribute (name/value pair).
#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}
