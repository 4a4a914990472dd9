use anyhow::{Context, anyhow, bail};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, warn};
use uav_kinematics::Point;

/// Everything needed to plan one path.
#[derive(Debug, Clone, PartialEq)]
pub struct MissionInput {
    pub start: Point,
    pub target: Point,
    /// Initial heading (degrees).
    pub heading: f64,
    /// Maximum turn per step (degrees).
    pub max_turn_angle: f64,
    pub step_size: f64,
}

pub fn read_input(path: &Path) -> anyhow::Result<MissionInput> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Unable to open input file: {}", path.display()))?;
    let mission = parse_input(&text)
        .with_context(|| format!("Invalid input file format: {}", path.display()))?;
    debug!(?mission, "Mission input loaded");
    Ok(mission)
}

/// Parses `(x,y) (x,y) heading max_turn step`, separated by any whitespace.
pub fn parse_input(text: &str) -> anyhow::Result<MissionInput> {
    let tokens = tokenize(text)?;
    if tokens.len() < 5 {
        bail!("expected 5 values (start, target, heading, max turn angle, step size), found {}", tokens.len());
    }
    if tokens.len() > 5 {
        warn!(extra = tokens.len() - 5, "Ignoring trailing values in input");
    }

    Ok(MissionInput {
        start: tokens[0].parse::<Point>().context("start position")?,
        target: tokens[1].parse::<Point>().context("target position")?,
        heading: parse_scalar(tokens[2], "heading")?,
        max_turn_angle: parse_scalar(tokens[3], "max turn angle")?,
        step_size: parse_scalar(tokens[4], "step size")?,
    })
}

fn parse_scalar(token: &str, what: &'static str) -> anyhow::Result<f64> {
    token
        .parse::<f64>()
        .with_context(|| format!("{} `{}` is not a number", what, token))
}

/// Splits on whitespace, keeping each parenthesised point as one token even
/// when it contains spaces.
fn tokenize(text: &str) -> anyhow::Result<Vec<&str>> {
    let mut tokens = Vec::new();
    let mut rest = text.trim_start();
    while !rest.is_empty() {
        let end = if rest.starts_with('(') {
            rest.find(')')
                .map(|i| i + 1)
                .ok_or_else(|| anyhow!("unterminated point `{}`", rest.trim_end()))?
        } else {
            rest.find(char::is_whitespace).unwrap_or(rest.len())
        };
        tokens.push(&rest[..end]);
        rest = rest[end..].trim_start();
    }
    Ok(tokens)
}

pub fn write_path(path: &Path, waypoints: &[Point]) -> anyhow::Result<()> {
    let file = fs::File::create(path)
        .with_context(|| format!("Unable to open output file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_points(&mut writer, waypoints)
        .and_then(|_| writer.flush())
        .with_context(|| format!("Failed writing path to {}", path.display()))
}

fn write_points<W: Write>(writer: &mut W, waypoints: &[Point]) -> std::io::Result<()> {
    for point in waypoints {
        writeln!(writer, "{}", point)?;
    }
    Ok(())
}
