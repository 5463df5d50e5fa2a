//! Static table of the London Underground lines covered by the report
//!
//! Each line pairs the display name shown in the report with the stable id
//! used by the TfL API and the roundel-inspired label colors. The table is
//! immutable and printed in declared order.

use crate::style::Style;

/// One Underground line: display name, TfL line id, label style.
#[derive(Debug, Clone, Copy)]
pub struct Line {
    pub name: &'static str,
    pub id: &'static str,
    pub style: Style,
}

/// The 11 lines reported on, in print order. Ids follow the TfL API and are
/// distinct from display names for Hammersmith & City and Waterloo & City.
pub const LONDON_TUBE: [Line; 11] = [
    Line {
        name: "Jubilee",
        id: "jubilee",
        style: Style::on(231, 102),
    },
    Line {
        name: "Bakerloo",
        id: "bakerloo",
        style: Style::on(231, 94),
    },
    Line {
        name: "Central",
        id: "central",
        style: Style::on(231, 160),
    },
    Line {
        name: "District",
        id: "district",
        style: Style::on(231, 22),
    },
    Line {
        name: "Hammersmith",
        id: "hammersmith-city",
        style: Style::on(16, 175),
    },
    Line {
        name: "Circle",
        id: "circle",
        style: Style::on(16, 220),
    },
    Line {
        name: "Metropolitan",
        id: "metropolitan",
        style: Style::on(231, 89),
    },
    Line {
        name: "Northern",
        id: "northern",
        style: Style::on(231, 16),
    },
    Line {
        name: "Piccadilly",
        id: "piccadilly",
        style: Style::on(231, 19),
    },
    Line {
        name: "Victoria",
        id: "victoria",
        style: Style::on(16, 38),
    },
    Line {
        name: "Waterloo",
        id: "waterloo-city",
        style: Style::on(16, 115),
    },
];

/// Display names of every line, the label set the column width is computed from.
pub fn line_names() -> impl Iterator<Item = &'static str> {
    LONDON_TUBE.iter().map(|line| line.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_eleven_lines() {
        assert_eq!(LONDON_TUBE.len(), 11);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<&str> = LONDON_TUBE.iter().map(|l| l.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), LONDON_TUBE.len());
    }

    #[test]
    fn test_compound_line_ids() {
        let hammersmith = LONDON_TUBE.iter().find(|l| l.name == "Hammersmith").unwrap();
        assert_eq!(hammersmith.id, "hammersmith-city");
        let waterloo = LONDON_TUBE.iter().find(|l| l.name == "Waterloo").unwrap();
        assert_eq!(waterloo.id, "waterloo-city");
    }

    #[test]
    fn test_longest_name_is_metropolitan() {
        let longest = line_names().max_by_key(|name| name.len()).unwrap();
        assert_eq!(longest, "Metropolitan");
    }
}
