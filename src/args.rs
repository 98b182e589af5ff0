//! Dynamic call shapes for the drawing primitives
//!
//! Typed entry points on `Console` cannot be called with a bad shape. Hosts
//! that forward untyped arguments (a script bridge, a REPL) go through the
//! `Arg` lists here, which accept exactly the shapes below and reject the rest:
//!
//! | op         | accepted shapes                                        |
//! |------------|--------------------------------------------------------|
//! | rect, box  | `n n n n`, `n n v`, `v n n`, `v v`                     |
//! | line       | `n n n n [n]`, `n n v [n]`, `v n n [n]`, `v v [n]`     |
//! | bar        | `n n n n [n [n]]`, `v n n [n [n]]`                     |
//! | text, char | `n n`, `v`                                             |

use thiserror::Error;

use crate::geom::Vector;

/// Errors from the drawing facade
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DrawError {
    #[error("invalid params for {op}: ({shape})")]
    InvalidParams { op: &'static str, shape: String },
    #[error("unknown color: {0}")]
    UnknownColor(String),
}

/// One untyped argument
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Arg {
    Num(f32),
    Vec(Vector),
}

impl From<f32> for Arg {
    fn from(v: f32) -> Self {
        Arg::Num(v)
    }
}

impl From<Vector> for Arg {
    fn from(v: Vector) -> Self {
        Arg::Vec(v)
    }
}

/// Rectangle position and size as given by the caller (not yet floored)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectSpec {
    pub pos: Vector,
    pub size: Vector,
}

/// Segment endpoints and thickness
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSpec {
    pub from: Vector,
    pub to: Vector,
    pub thickness: f32,
}

/// Rotated bar around a center point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarSpec {
    pub center: Vector,
    pub length: f32,
    pub thickness: f32,
    pub angle: f32,
    pub center_ratio: f32,
}

pub const DEFAULT_LINE_THICKNESS: f32 = 3.0;
pub const DEFAULT_BAR_ANGLE: f32 = 0.5;
pub const DEFAULT_BAR_CENTER_RATIO: f32 = 0.5;

fn invalid(op: &'static str, args: &[Arg]) -> DrawError {
    let shape = args
        .iter()
        .map(|a| match a {
            Arg::Num(_) => "num",
            Arg::Vec(_) => "vec",
        })
        .collect::<Vec<_>>()
        .join(", ");
    DrawError::InvalidParams { op, shape }
}

pub fn parse_rect(op: &'static str, args: &[Arg]) -> Result<RectSpec, DrawError> {
    use Arg::*;
    let (pos, size) = match *args {
        [Num(x), Num(y), Num(w), Num(h)] => (Vector::new(x, y), Vector::new(w, h)),
        [Num(x), Num(y), Vec(s)] => (Vector::new(x, y), s),
        [Vec(p), Num(w), Num(h)] => (p, Vector::new(w, h)),
        [Vec(p), Vec(s)] => (p, s),
        _ => return Err(invalid(op, args)),
    };
    Ok(RectSpec { pos, size })
}

pub fn parse_line(args: &[Arg]) -> Result<LineSpec, DrawError> {
    use Arg::*;
    let (from, to, rest) = match *args {
        [Num(x1), Num(y1), Num(x2), Num(y2), ref rest @ ..] => {
            (Vector::new(x1, y1), Vector::new(x2, y2), rest)
        }
        [Num(x1), Num(y1), Vec(p2), ref rest @ ..] => (Vector::new(x1, y1), p2, rest),
        [Vec(p1), Num(x2), Num(y2), ref rest @ ..] => (p1, Vector::new(x2, y2), rest),
        [Vec(p1), Vec(p2), ref rest @ ..] => (p1, p2, rest),
        _ => return Err(invalid("line", args)),
    };
    let thickness = match *rest {
        [] => DEFAULT_LINE_THICKNESS,
        [Num(t)] => t,
        _ => return Err(invalid("line", args)),
    };
    Ok(LineSpec { from, to, thickness })
}

pub fn parse_bar(args: &[Arg]) -> Result<BarSpec, DrawError> {
    use Arg::*;
    let (center, rest) = match *args {
        [Num(x), Num(y), ref rest @ ..] => (Vector::new(x, y), rest),
        [Vec(p), ref rest @ ..] => (p, rest),
        _ => return Err(invalid("bar", args)),
    };
    let (length, thickness, angle, center_ratio) = match *rest {
        [Num(l), Num(t)] => (l, t, DEFAULT_BAR_ANGLE, DEFAULT_BAR_CENTER_RATIO),
        [Num(l), Num(t), Num(a)] => (l, t, a, DEFAULT_BAR_CENTER_RATIO),
        [Num(l), Num(t), Num(a), Num(r)] => (l, t, a, r),
        _ => return Err(invalid("bar", args)),
    };
    Ok(BarSpec {
        center,
        length,
        thickness,
        angle,
        center_ratio,
    })
}

pub fn parse_point(op: &'static str, args: &[Arg]) -> Result<Vector, DrawError> {
    match *args {
        [Arg::Num(x), Arg::Num(y)] => Ok(Vector::new(x, y)),
        [Arg::Vec(p)] => Ok(p),
        _ => Err(invalid(op, args)),
    }
}
