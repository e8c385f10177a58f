//! Scene traversal: turns the node tree into a flat, ordered command
//! sequence.
//!
//! The visitor owns the output accumulator for the duration of one
//! conversion and hands it over through [`SceneVisitor::finish`]; there is
//! no state beyond the accumulator, the handle counter, and the recursion
//! depth carried on the call stack.

use crate::color::{self, Color};
use crate::error::ConvertError;
use crate::path::{self, PathCommand};
use crate::scene::SceneNode;

/// Reference to a built path, assigned in emission order. A fill-push or
/// discard entry always names the handle of the path built just before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathHandle(pub usize);

/// One unit of generated output: a drawing-buffer operation or a
/// structural block delimiter, annotated with its nesting depth.
#[derive(Debug, Clone)]
pub enum EmittedCommand {
    BeginGroup {
        depth: usize,
    },
    EndGroup {
        depth: usize,
    },
    BuildPath {
        depth: usize,
        handle: PathHandle,
        commands: Vec<PathCommand>,
    },
    PushFillSolid {
        depth: usize,
        handle: PathHandle,
        color: Color,
    },
    /// The path was built but has no fill; the handle is intentionally
    /// released in output so the generated binding is still consumed.
    DiscardPath {
        depth: usize,
        handle: PathHandle,
    },
}

/// Walks the scene tree in document order.
pub struct SceneVisitor {
    commands: Vec<EmittedCommand>,
    next_handle: usize,
}

impl SceneVisitor {
    pub fn new() -> Self {
        SceneVisitor {
            commands: Vec::new(),
            next_handle: 0,
        }
    }

    /// Visits one node at the given nesting depth. Groups recurse one
    /// level deeper; paths dispatch to the path-data parser and the color
    /// extractor; anything else is skipped with a stderr diagnostic.
    pub fn visit(&mut self, node: &SceneNode, depth: usize) -> Result<(), ConvertError> {
        match node.name.as_str() {
            "g" => {
                self.commands.push(EmittedCommand::BeginGroup { depth });
                for child in &node.children {
                    self.visit(child, depth + 1)?;
                }
                self.commands.push(EmittedCommand::EndGroup { depth });
            }
            "path" => {
                let data = node.attr("d").unwrap_or("");
                let commands = path::parse_path_data(data)?;
                let handle = PathHandle(self.next_handle);
                self.next_handle += 1;
                self.commands.push(EmittedCommand::BuildPath {
                    depth,
                    handle,
                    commands,
                });

                // An empty fill attribute means "no fill", same as "none".
                let fill = node.attr("fill").unwrap_or("");
                if fill.is_empty() || fill == "none" {
                    self.commands
                        .push(EmittedCommand::DiscardPath { depth, handle });
                } else {
                    let color = color::extract_rgb(fill)?;
                    self.commands.push(EmittedCommand::PushFillSolid {
                        depth,
                        handle,
                        color,
                    });
                }
            }
            other => eprintln!("ignoring <{other}>"),
        }
        Ok(())
    }

    /// Hands the accumulated command sequence to the caller.
    pub fn finish(self) -> Vec<EmittedCommand> {
        self.commands
    }
}

impl Default for SceneVisitor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::parse_scene;

    fn run(svg: &str) -> Vec<EmittedCommand> {
        let roots = parse_scene(svg).unwrap();
        let mut visitor = SceneVisitor::new();
        for node in &roots {
            visitor.visit(node, 0).unwrap();
        }
        visitor.finish()
    }

    #[test]
    fn test_group_wraps_children_one_level_deeper() {
        let cmds = run(r#"<svg><g><path d="M0,0" fill="rgb(255,0,0)"/></g></svg>"#);
        assert!(matches!(cmds[0], EmittedCommand::BeginGroup { depth: 0 }));
        assert!(matches!(cmds[1], EmittedCommand::BuildPath { depth: 1, .. }));
        assert!(matches!(
            cmds[2],
            EmittedCommand::PushFillSolid { depth: 1, .. }
        ));
        assert!(matches!(cmds[3], EmittedCommand::EndGroup { depth: 0 }));
    }

    #[test]
    fn test_fill_none_discards_the_path() {
        let cmds = run(r#"<svg><path d="M0,0" fill="none"/></svg>"#);
        assert_eq!(cmds.len(), 2);
        let EmittedCommand::BuildPath { handle, .. } = &cmds[0] else {
            panic!("expected BuildPath, got {:?}", cmds[0]);
        };
        assert!(
            matches!(cmds[1], EmittedCommand::DiscardPath { handle: h, .. } if h == *handle)
        );
    }

    #[test]
    fn test_missing_fill_discards_like_none() {
        let cmds = run(r#"<svg><path d="M0,0"/></svg>"#);
        assert!(matches!(cmds[1], EmittedCommand::DiscardPath { .. }));
    }

    #[test]
    fn test_empty_fill_discards_like_none() {
        let cmds = run(r#"<svg><path d="M0,0" fill=""/></svg>"#);
        assert!(matches!(cmds[1], EmittedCommand::DiscardPath { .. }));
    }

    #[test]
    fn test_missing_path_data_builds_empty_path() {
        let cmds = run("<svg><path/></svg>");
        assert!(
            matches!(&cmds[0], EmittedCommand::BuildPath { commands, .. } if commands.is_empty())
        );
    }

    #[test]
    fn test_handles_are_sequential() {
        let cmds = run(r#"<svg><path d="M0,0"/><path d="M1,1"/></svg>"#);
        let handles: Vec<usize> = cmds
            .iter()
            .filter_map(|c| match c {
                EmittedCommand::BuildPath { handle, .. } => Some(handle.0),
                _ => None,
            })
            .collect();
        assert_eq!(handles, vec![0, 1]);
    }

    #[test]
    fn test_unrecognized_element_is_skipped() {
        let cmds = run(r#"<svg><rect width="4"/><path d="M0,0"/></svg>"#);
        // The rect contributes nothing; its path sibling still emits.
        assert_eq!(cmds.len(), 2);
        assert!(matches!(cmds[0], EmittedCommand::BuildPath { depth: 0, .. }));
    }

    #[test]
    fn test_malformed_fill_is_fatal() {
        let roots = parse_scene(r#"<svg><path d="M0,0" fill="red"/></svg>"#).unwrap();
        let mut visitor = SceneVisitor::new();
        let err = visitor.visit(&roots[0], 0).unwrap_err();
        assert!(matches!(err, ConvertError::MalformedFillColor(_)));
    }

    #[test]
    fn test_bad_path_data_is_fatal() {
        let roots = parse_scene(r#"<svg><path d="M0,0 X1,1"/></svg>"#).unwrap();
        let mut visitor = SceneVisitor::new();
        let err = visitor.visit(&roots[0], 0).unwrap_err();
        assert!(matches!(err, ConvertError::UnknownPathCommand('X')));
    }
}
