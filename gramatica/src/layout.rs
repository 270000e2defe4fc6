#![deny(warnings)]

use crate::trees::ParseTree;

// horizontal distance between leaves, vertical distance between levels
const HSEP: f64 = 30.0;
const VSEP: f64 = 45.0;
// strip under the tree holding the generated sentence
const STRIP_HEIGHT: f64 = 30.0;
// gaps between a label and the lines touching it
const TOP: f64 = 15.0;
const BOTTOM: f64 = 5.0;
const H_PADDING: f64 = 20.0;
const V_PADDING: f64 = 20.0;

pub const TERM_SYMBOL_COLOUR: &str = "#0000cc";
pub const TERM_LINE_COLOUR: &str = "#dddddd";
pub const NT_SYMBOL_COLOUR: &str = "#cc0000";
pub const NT_LINE_COLOUR: &str = "black";
pub const NT_NULL_COLOUR: &str = "#aaaaaa";
pub const TREE_BACKGROUND: &str = "#fff7db";
pub const SENTENCE_BACKGROUND: &str = "#f0e6bc";
pub const NT_NULL_SYMBOL: &str = "\u{03b5}";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Primitives handed to a renderer.
#[derive(Clone, Debug, PartialEq)]
pub enum Drawing {
    Rect { x: f64, y: f64, width: f64, height: f64, fill: &'static str },
    Text { x: f64, y: f64, colour: &'static str, text: String },
    Lines { colour: &'static str, lines: Vec<Line> },
}

/// A whole tree laid out in a box of `width` x `height`.
#[derive(Clone, Debug, PartialEq)]
pub struct Picture {
    pub width: f64,
    pub height: f64,
    pub elements: Vec<Drawing>,
}

fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Line {
    Line { x1, y1, x2, y2 }
}

fn text(x: f64, y: f64, colour: &'static str, text: &str) -> Drawing {
    Drawing::Text { x, y, colour, text: text.to_string() }
}

impl ParseTree {
    /// Lay out this subtree with its leftmost column at `x` and its root at
    /// `y`, `levels` rows above the sentence strip. Appends primitives to
    /// `out` and returns the x-coordinate of this node's label.
    pub fn draw(&self, out: &mut Vec<Drawing>, x: f64, y: f64, levels: usize) -> f64 {
        match self {
            ParseTree::Terminal(sym) => {
                out.push(text(x, y, TERM_SYMBOL_COLOUR, sym));
                // the same terminal again, in the sentence strip
                let ly = y + levels as f64 * VSEP - 10.0;
                out.push(text(x, ly, TERM_SYMBOL_COLOUR, sym));
                out.push(Drawing::Lines {
                    colour: TERM_LINE_COLOUR,
                    lines: vec![line(x, y + BOTTOM, x, ly - TOP)],
                });
                x
            }
            ParseTree::NonTerminal(nt) => {
                let ty = y + VSEP;
                let mut roots = Vec::new();
                let mut tx = x;
                for child in nt.children() {
                    roots.push(child.draw(out, tx, ty, levels.saturating_sub(1)));
                    tx += child.width() as f64 * HSEP;
                }
                let n = roots.len();
                // median of the children's roots
                let rx = if n == 0 { x } else { (roots[(n - 1) / 2] + roots[n / 2]) / 2.0 };
                out.push(text(rx, y, NT_SYMBOL_COLOUR, nt.symbol()));

                let (y1, y2) = (y + BOTTOM, ty - TOP);
                if n == 0 {
                    out.push(text(x, ty, NT_NULL_COLOUR, NT_NULL_SYMBOL));
                    out.push(Drawing::Lines { colour: NT_NULL_COLOUR, lines: vec![line(x, y1, x, y2)] });
                } else {
                    out.push(Drawing::Lines {
                        colour: NT_LINE_COLOUR,
                        lines: roots.iter().map(|&cx| line(rx, y1, cx, y2)).collect(),
                    });
                }
                rx
            }
        }
    }

    // Rows needed to draw the tree, the epsilon marker takes a row of its own.
    fn rows(&self) -> usize {
        match self {
            ParseTree::Terminal(_) => 1,
            ParseTree::NonTerminal(nt) if nt.children().is_empty() => 2,
            ParseTree::NonTerminal(nt) => 1 + nt.children().iter().map(ParseTree::rows).max().unwrap_or(0),
        }
    }
}

/// Frame a tree: background for the tree, a strip for its sentence and the
/// tree itself on top.
pub fn draw_tree(tree: &ParseTree) -> Picture {
    let rows = tree.rows();
    let box_width = tree.width() as f64 * HSEP;
    let box_height = rows as f64 * VSEP;
    let mut elements = vec![
        Drawing::Rect { x: 0.0, y: 0.0, width: box_width, height: box_height, fill: TREE_BACKGROUND },
        Drawing::Rect { x: 0.0, y: box_height, width: box_width, height: STRIP_HEIGHT, fill: SENTENCE_BACKGROUND },
    ];
    tree.draw(&mut elements, HSEP / 2.0, 30.0, rows);
    Picture {
        width: box_width + H_PADDING,
        height: box_height + STRIP_HEIGHT + V_PADDING,
        elements,
    }
}

///////////////////////////////////////////////////////////////////////////////
