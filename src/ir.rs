use serde::{Deserialize, Serialize};

/// Label used when a block carries neither a name nor a file name.
pub const PLACEHOLDER_LABEL: &str = "블록";

/// Visual shape kind of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    /// Event trigger: no top connector, children hang below.
    Start,
    /// Sequential statement.
    Simple,
    /// Loop or conditional whose body hosts nested children.
    Container,
    /// Boolean-valued predicate (hexagon).
    Judgement,
    /// Scalar-valued expression (pill).
    Value,
}

impl BlockKind {
    pub const ALL: [BlockKind; 5] = [
        BlockKind::Start,
        BlockKind::Simple,
        BlockKind::Container,
        BlockKind::Judgement,
        BlockKind::Value,
    ];

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "start" => Some(Self::Start),
            "simple" => Some(Self::Simple),
            "container" => Some(Self::Container),
            "judgement" => Some(Self::Judgement),
            "value" => Some(Self::Value),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Simple => "simple",
            Self::Container => "container",
            Self::Judgement => "judgement",
            Self::Value => "value",
        }
    }
}

/// One block in a program-structure tree, as supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub explicit_type: Option<String>,
    #[serde(default, deserialize_with = "children_or_empty")]
    pub children: Vec<BlockNode>,
    #[serde(default)]
    pub selected: bool,
}

impl BlockNode {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            category: Some(category.into()),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn with_type(mut self, explicit_type: impl Into<String>) -> Self {
        self.explicit_type = Some(explicit_type.into());
        self
    }

    pub fn with_children(mut self, children: Vec<BlockNode>) -> Self {
        self.children = children;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }

    /// Raw identifier of the block definition (e.g. `repeat_basic`).
    pub fn identifier(&self) -> &str {
        self.file_name.as_deref().unwrap_or("")
    }

    /// Display label before truncation: name, then identifier, then a placeholder.
    pub fn label(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .or_else(|| self.file_name.as_deref().filter(|name| !name.is_empty()))
            .unwrap_or(PLACEHOLDER_LABEL)
    }

    pub fn is_start_category(&self) -> bool {
        self.category() == "start"
    }
}

// `"children": null` is accepted and treated like a missing array.
fn children_or_empty<'de, D>(deserializer: D) -> Result<Vec<BlockNode>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<BlockNode>>::deserialize(deserializer)?.unwrap_or_default())
}

/// What a render request hands the assembler: one tree, or a run of siblings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockInput {
    Many(Vec<BlockNode>),
    Single(BlockNode),
}

impl BlockInput {
    pub fn is_empty(&self) -> bool {
        match self {
            BlockInput::Many(nodes) => nodes.is_empty(),
            BlockInput::Single(_) => false,
        }
    }

    pub fn as_slice(&self) -> &[BlockNode] {
        match self {
            BlockInput::Many(nodes) => nodes,
            BlockInput::Single(node) => std::slice::from_ref(node),
        }
    }
}

impl From<BlockNode> for BlockInput {
    fn from(node: BlockNode) -> Self {
        BlockInput::Single(node)
    }
}

impl From<Vec<BlockNode>> for BlockInput {
    fn from(nodes: Vec<BlockNode>) -> Self {
        BlockInput::Many(nodes)
    }
}
