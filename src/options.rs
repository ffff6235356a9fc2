/*
 * Option Table Module
 *
 * The fixed, enumerated list of tunable options. Each entry names an option,
 * places it in a panel folder, and carries typed accessors into
 * ConstellationParams. The parameter panel and name based access both walk this
 * table; nothing is discovered at runtime.
 */

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::color::Color;
use crate::error::{ConstellationError, Result};
use crate::params::ConstellationParams;

/// A value read from or written to an option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OptionValue {
    Number(f64),
    Bool(bool),
    Color(Color),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Number(n) => write!(f, "{}", n),
            OptionValue::Bool(b) => write!(f, "{}", b),
            OptionValue::Color(c) => write!(f, "{}", c),
        }
    }
}

impl FromStr for OptionValue {
    type Err = ConstellationError;

    /// Parses `true`/`false`, `#hex` colors and plain numbers.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s {
            "true" => Ok(OptionValue::Bool(true)),
            "false" => Ok(OptionValue::Bool(false)),
            _ if s.starts_with('#') => s.parse().map(OptionValue::Color),
            _ => s
                .parse::<f64>()
                .map(OptionValue::Number)
                .map_err(|_| ConstellationError::KindMismatch {
                    name: s.to_string(),
                    expected: "number, bool or color",
                }),
        }
    }
}

/// The panel folder an option is shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Folder {
    General,
    Motion,
    Colors,
}

impl Folder {
    pub const ALL: [Folder; 3] = [Folder::General, Folder::Motion, Folder::Colors];

    pub fn title(self) -> &'static str {
        match self {
            Folder::General => "General",
            Folder::Motion => "Motion",
            Folder::Colors => "Colors",
        }
    }
}

/// Typed access to one field of ConstellationParams.
#[derive(Clone, Copy)]
pub enum Access {
    Number {
        min: f64,
        max: f64,
        step: Option<f64>,
        get: fn(&ConstellationParams) -> f64,
        set: fn(&mut ConstellationParams, f64),
    },
    Bool {
        get: fn(&ConstellationParams) -> bool,
        set: fn(&mut ConstellationParams, bool),
    },
    Color {
        get: fn(&ConstellationParams) -> Color,
        set: fn(&mut ConstellationParams, Color),
    },
}

#[derive(Clone, Copy)]
pub struct OptionSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub folder: Folder,
    /// Edits only take effect once the field is re-initialized.
    pub requires_commit: bool,
    pub access: Access,
}

impl OptionSpec {
    pub fn get(&self, params: &ConstellationParams) -> OptionValue {
        match self.access {
            Access::Number { get, .. } => OptionValue::Number(get(params)),
            Access::Bool { get, .. } => OptionValue::Bool(get(params)),
            Access::Color { get, .. } => OptionValue::Color(get(params)),
        }
    }

    pub fn set(&self, params: &mut ConstellationParams, value: OptionValue) -> Result<()> {
        match (self.access, value) {
            (Access::Number { set, .. }, OptionValue::Number(n)) => set(params, n),
            (Access::Bool { set, .. }, OptionValue::Bool(b)) => set(params, b),
            (Access::Color { set, .. }, OptionValue::Color(c)) => set(params, c),
            (access, _) => {
                return Err(ConstellationError::KindMismatch {
                    name: self.name.to_string(),
                    expected: access.kind_name(),
                })
            }
        }
        Ok(())
    }

    /// Suggested slider range for numeric options. Values outside it are still accepted.
    pub fn range(&self) -> Option<RangeInclusive<f64>> {
        match self.access {
            Access::Number { min, max, .. } => Some(min..=max),
            _ => None,
        }
    }
}

impl Access {
    fn kind_name(self) -> &'static str {
        match self {
            Access::Number { .. } => "number",
            Access::Bool { .. } => "bool",
            Access::Color { .. } => "color",
        }
    }
}

impl fmt::Debug for OptionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionSpec")
            .field("name", &self.name)
            .field("folder", &self.folder)
            .field("kind", &self.access.kind_name())
            .finish()
    }
}

pub fn lookup(name: &str) -> Result<&'static OptionSpec> {
    OPTIONS
        .iter()
        .find(|spec| spec.name == name)
        .ok_or_else(|| ConstellationError::UnknownOption(name.to_string()))
}

pub fn in_folder(folder: Folder) -> impl Iterator<Item = &'static OptionSpec> {
    OPTIONS.iter().filter(move |spec| spec.folder == folder)
}

const fn number(
    name: &'static str,
    label: &'static str,
    folder: Folder,
    (min, max, step): (f64, f64, Option<f64>),
    get: fn(&ConstellationParams) -> f64,
    set: fn(&mut ConstellationParams, f64),
) -> OptionSpec {
    OptionSpec {
        name,
        label,
        folder,
        requires_commit: false,
        access: Access::Number { min, max, step, get, set },
    }
}

const fn boolean(
    name: &'static str,
    label: &'static str,
    folder: Folder,
    get: fn(&ConstellationParams) -> bool,
    set: fn(&mut ConstellationParams, bool),
) -> OptionSpec {
    OptionSpec {
        name,
        label,
        folder,
        requires_commit: false,
        access: Access::Bool { get, set },
    }
}

const fn color(
    name: &'static str,
    label: &'static str,
    get: fn(&ConstellationParams) -> Color,
    set: fn(&mut ConstellationParams, Color),
) -> OptionSpec {
    OptionSpec {
        name,
        label,
        folder: Folder::Colors,
        requires_commit: false,
        access: Access::Color { get, set },
    }
}

pub static OPTIONS: [OptionSpec; 17] = [
    // General
    OptionSpec {
        requires_commit: true,
        ..number(
            "points_count",
            "Points",
            Folder::General,
            (0.0, 2000.0, Some(1.0)),
            |p| p.points_count as f64,
            // `as` saturates negative and NaN inputs to zero
            |p, v| p.points_count = v.round() as usize,
        )
    },
    number(
        "point_size",
        "Point Size",
        Folder::General,
        (0.0, 50.0, Some(0.25)),
        |p| p.point_size as f64,
        |p, v| p.point_size = v as f32,
    ),
    number(
        "line_distance",
        "Line Distance",
        Folder::General,
        (0.0, 300.0, Some(5.0)),
        |p| p.line_distance as f64,
        |p, v| p.line_distance = v as f32,
    ),
    number(
        "line_width",
        "Line Width",
        Folder::General,
        (0.0, 20.0, Some(0.1)),
        |p| p.line_width as f64,
        |p, v| p.line_width = v as f32,
    ),
    // Motion
    boolean(
        "force_point_enabled",
        "Force Point",
        Folder::Motion,
        |p| p.force_point_enabled,
        |p, v| p.force_point_enabled = v,
    ),
    number(
        "velocity_ratio",
        "Velocity Ratio",
        Folder::Motion,
        (1.0, 10.0, None),
        |p| p.velocity_ratio as f64,
        |p, v| p.velocity_ratio = v as f32,
    ),
    number(
        "velocity_decay",
        "Velocity Decay",
        Folder::Motion,
        (0.0, 1.0, Some(0.1)),
        |p| p.velocity_decay as f64,
        |p, v| p.velocity_decay = v as f32,
    ),
    number(
        "gravity",
        "Gravity",
        Folder::Motion,
        (0.0, 5.0, Some(0.1)),
        |p| p.gravity as f64,
        |p, v| p.gravity = v as f32,
    ),
    number(
        "bounce",
        "Bounce",
        Folder::Motion,
        (0.0, 1.0, Some(0.1)),
        |p| p.bounce as f64,
        |p, v| p.bounce = v as f32,
    ),
    // Colors
    boolean(
        "transparent_background",
        "Transparent Background",
        Folder::Colors,
        |p| p.transparent_background,
        |p, v| p.transparent_background = v,
    ),
    color(
        "background_color",
        "Background",
        |p| p.background_color,
        |p, c| p.background_color = c,
    ),
    color("point_color", "Points", |p| p.point_color, |p, c| p.point_color = c),
    color("lines_color", "Lines", |p| p.lines_color, |p, c| p.lines_color = c),
    boolean(
        "lines_gradient_enabled",
        "Lines Gradient",
        Folder::Colors,
        |p| p.lines_gradient_enabled,
        |p, v| p.lines_gradient_enabled = v,
    ),
    color(
        "lines_gradient_start_color",
        "Gradient Start",
        |p| p.lines_gradient_start_color,
        |p, c| p.lines_gradient_start_color = c,
    ),
    color(
        "lines_gradient_middle_color",
        "Gradient Middle",
        |p| p.lines_gradient_middle_color,
        |p, c| p.lines_gradient_middle_color = c,
    ),
    color(
        "lines_gradient_end_color",
        "Gradient End",
        |p| p.lines_gradient_end_color,
        |p, c| p.lines_gradient_end_color = c,
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let names: HashSet<_> = OPTIONS.iter().map(|spec| spec.name).collect();
        assert_eq!(names.len(), OPTIONS.len());
    }

    #[test]
    fn only_points_count_requires_commit() {
        let committed: Vec<_> = OPTIONS
            .iter()
            .filter(|spec| spec.requires_commit)
            .map(|spec| spec.name)
            .collect();
        assert_eq!(committed, vec!["points_count"]);
    }

    #[test]
    fn every_folder_has_options() {
        for folder in Folder::ALL {
            assert!(in_folder(folder).count() > 0, "{} is empty", folder.title());
        }
        let total: usize = Folder::ALL.iter().map(|f| in_folder(*f).count()).sum();
        assert_eq!(total, OPTIONS.len());
    }

    #[test]
    fn every_option_round_trips_its_own_value() {
        let mut params = ConstellationParams::default();
        for spec in OPTIONS.iter() {
            let value = spec.get(&params);
            spec.set(&mut params, value).unwrap();
            assert_eq!(spec.get(&params), value, "{}", spec.name);
        }
        assert_eq!(params, ConstellationParams::default());
    }

    #[test]
    fn ranges_match_the_panel() {
        assert_eq!(lookup("points_count").unwrap().range(), Some(0.0..=2000.0));
        assert_eq!(lookup("velocity_ratio").unwrap().range(), Some(1.0..=10.0));
        assert_eq!(lookup("point_color").unwrap().range(), None);
    }

    #[test]
    fn option_values_parse_from_text() {
        assert_eq!("true".parse::<OptionValue>().unwrap(), OptionValue::Bool(true));
        assert_eq!("0.25".parse::<OptionValue>().unwrap(), OptionValue::Number(0.25));
        assert_eq!(
            "#ff00ff".parse::<OptionValue>().unwrap(),
            OptionValue::Color(Color::new(255, 0, 255))
        );
        assert!("fast".parse::<OptionValue>().is_err());
    }
}
