//! Block outlines.
//!
//! Every outline is expressed in block-local coordinates with the origin at the
//! top-left of the block. Statement shapes carry a jigsaw notch on top and a
//! matching tab below; connector tabs are 6px deep and 12px wide.

use std::fmt;

use crate::ir::BlockKind;

/// Height of one statement row and of a container's header bar.
pub const ROW_HEIGHT: f32 = 28.0;
/// Height of a container's footer bar.
pub const CONTAINER_FOOTER_HEIGHT: f32 = 15.0;
/// Vertical space an event block takes above its first child.
pub const START_HEIGHT: f32 = 40.0;
/// Left edge of a container's inner gap, where nested children start.
pub const CHILD_INDENT: f32 = 14.0;
/// Where an event block's bottom tab sits; its first child hangs there.
pub const START_CHILD_OFFSET: (f32, f32) = (12.0, 34.0);

const ROW_RADIUS: f32 = ROW_HEIGHT / 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo { x: f32, y: f32, relative: bool },
    LineTo { x: f32, y: f32, relative: bool },
    Horizontal { x: f32, relative: bool },
    Vertical { y: f32, relative: bool },
    Arc {
        radius: f32,
        sweep: bool,
        x: f32,
        y: f32,
        relative: bool,
    },
    Cubic {
        c1: (f32, f32),
        c2: (f32, f32),
        to: (f32, f32),
        relative: bool,
    },
    Close,
}

/// A closed outline. `Display` renders SVG path data.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShapePath {
    commands: Vec<PathCommand>,
}

impl ShapePath {
    fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    fn move_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::MoveTo { x, y, relative: false });
        self
    }

    fn move_by(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::MoveTo { x, y, relative: true });
        self
    }

    fn line_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::LineTo { x, y, relative: false });
        self
    }

    fn line_by(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::LineTo { x, y, relative: true });
        self
    }

    fn h_to(mut self, x: f32) -> Self {
        self.commands.push(PathCommand::Horizontal { x, relative: false });
        self
    }

    fn h_by(mut self, x: f32) -> Self {
        self.commands.push(PathCommand::Horizontal { x, relative: true });
        self
    }

    fn v_by(mut self, y: f32) -> Self {
        self.commands.push(PathCommand::Vertical { y, relative: true });
        self
    }

    fn arc(mut self, radius: f32, sweep: bool, x: f32, y: f32, relative: bool) -> Self {
        self.commands.push(PathCommand::Arc {
            radius,
            sweep,
            x,
            y,
            relative,
        });
        self
    }

    fn cubic(mut self, c1: (f32, f32), c2: (f32, f32), to: (f32, f32), relative: bool) -> Self {
        self.commands.push(PathCommand::Cubic {
            c1,
            c2,
            to,
            relative,
        });
        self
    }

    // Downward connector tab: 6px down-right then 6px up-right.
    fn tab(self) -> Self {
        self.line_by(6.0, 6.0).line_by(6.0, -6.0)
    }

    // Same tab traversed right-to-left.
    fn tab_back(self) -> Self {
        self.line_by(-6.0, 6.0).line_by(-6.0, -6.0)
    }

    fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }
}

impl fmt::Display for ShapePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, command) in self.commands.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            let letter = |upper: char, relative: bool| {
                if relative {
                    upper.to_ascii_lowercase()
                } else {
                    upper
                }
            };
            match *command {
                PathCommand::MoveTo { x, y, relative } => {
                    write!(f, "{} {} {}", letter('M', relative), x, y)?
                }
                PathCommand::LineTo { x, y, relative } => {
                    write!(f, "{} {} {}", letter('L', relative), x, y)?
                }
                PathCommand::Horizontal { x, relative } => {
                    write!(f, "{} {}", letter('H', relative), x)?
                }
                PathCommand::Vertical { y, relative } => {
                    write!(f, "{} {}", letter('V', relative), y)?
                }
                PathCommand::Arc {
                    radius,
                    sweep,
                    x,
                    y,
                    relative,
                } => write!(
                    f,
                    "{} {} {} 0 0 {} {} {}",
                    letter('A', relative),
                    radius,
                    radius,
                    u8::from(sweep),
                    x,
                    y
                )?,
                PathCommand::Cubic {
                    c1,
                    c2,
                    to,
                    relative,
                } => write!(
                    f,
                    "{} {} {} {} {} {} {}",
                    letter('C', relative),
                    c1.0,
                    c1.1,
                    c2.0,
                    c2.1,
                    to.0,
                    to.1
                )?,
                PathCommand::Close => f.write_str("z")?,
            }
        }
        Ok(())
    }
}

/// Event block: rounded body with a hat on the left and only a bottom tab.
pub fn start_path(width: f32) -> ShapePath {
    let (tab_x, tab_y) = START_CHILD_OFFSET;
    ShapePath::new()
        .move_by(tab_x + 12.0, tab_y)
        .h_by((width - 44.0).max(0.0))
        .arc(ROW_RADIUS, false, 0.0, -ROW_HEIGHT, true)
        .h_to(30.0)
        .arc(17.0, false, 18.0, 1.0, false)
        .cubic((8.611, 1.0), (1.0, 8.611), (1.0, 18.0), false)
        .cubic((0.0, 7.2), (4.5, 13.5), (11.0, 16.0), true)
        .tab()
        .close()
}

/// Statement block: top notch, rounded right end, bottom tab.
pub fn simple_path(width: f32) -> ShapePath {
    let body = (width - 12.0).max(0.0);
    ShapePath::new()
        .move_to(0.0, 0.0)
        .tab()
        .h_by(body)
        .arc(ROW_RADIUS, true, 0.0, ROW_HEIGHT, true)
        .h_by(-body)
        .tab_back()
        .close()
}

/// Loop/conditional block: header bar, an inner gap of `inner_height` whose
/// left edge is indented to host children, then a footer bar.
pub fn container_path(width: f32, inner_height: f32) -> ShapePath {
    ShapePath::new()
        .move_by(0.0, 0.0)
        .tab()
        .h_by((width - 24.0).max(0.0))
        .arc(ROW_RADIUS, true, 0.0, ROW_HEIGHT, true)
        .h_to(CHILD_INDENT + 12.0)
        .tab_back()
        .v_by(inner_height.max(0.0))
        .tab()
        .h_by((width - 36.0).max(0.0))
        .arc(
            CONTAINER_FOOTER_HEIGHT / 2.0,
            true,
            0.0,
            CONTAINER_FOOTER_HEIGHT,
            true,
        )
        .h_to(12.0)
        .tab_back()
        .close()
}

/// Boolean block: hexagon pointed left and right.
pub fn judgement_path(width: f32) -> ShapePath {
    ShapePath::new()
        .move_to(0.0, ROW_RADIUS)
        .line_to(ROW_RADIUS, 0.0)
        .line_to(width - ROW_RADIUS, 0.0)
        .line_to(width, ROW_RADIUS)
        .line_to(width - ROW_RADIUS, ROW_HEIGHT)
        .line_to(ROW_RADIUS, ROW_HEIGHT)
        .close()
}

/// Value block: pill with full-height rounded caps.
pub fn value_path(width: f32) -> ShapePath {
    let body = (width - ROW_HEIGHT).max(0.0);
    ShapePath::new()
        .move_to(ROW_RADIUS, 0.0)
        .h_by(body)
        .arc(ROW_RADIUS, true, 0.0, ROW_HEIGHT, true)
        .h_by(-body)
        .arc(ROW_RADIUS, true, 0.0, -ROW_HEIGHT, true)
        .close()
}

impl BlockKind {
    pub fn outline(self, width: f32, inner_height: f32) -> ShapePath {
        match self {
            BlockKind::Start => start_path(width),
            BlockKind::Simple => simple_path(width),
            BlockKind::Container => container_path(width, inner_height),
            BlockKind::Judgement => judgement_path(width),
            BlockKind::Value => value_path(width),
        }
    }

    /// Vertical extent of the outline, connector tabs excluded.
    pub fn body_height(self, inner_height: f32) -> f32 {
        match self {
            BlockKind::Start => START_HEIGHT,
            BlockKind::Container => ROW_HEIGHT + inner_height.max(0.0) + CONTAINER_FOOTER_HEIGHT,
            BlockKind::Simple | BlockKind::Judgement | BlockKind::Value => ROW_HEIGHT,
        }
    }
}
