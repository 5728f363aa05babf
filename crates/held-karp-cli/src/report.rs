use std::fmt;

use held_karp_core::{CostMatrix, Tour};

const WIDTH: usize = 50;

fn line(f: &mut fmt::Formatter<'_>, ch: char) -> fmt::Result {
    writeln!(f, "{}", ch.to_string().repeat(WIDTH))
}

fn banner(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    line(f, '=')?;
    writeln!(f, "{title:>30}")?;
    line(f, '=')
}

/// The distance matrix block, eight columns per cost.
pub struct MatrixTable<'a>(pub &'a CostMatrix);

impl fmt::Display for MatrixTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nDistance Matrix:")?;
        for row in self.0.rows() {
            for value in row {
                write!(f, "{value:>8} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The human-readable summary printed after a solve.
pub struct Report<'a> {
    pub matrix: &'a CostMatrix,
    pub tour: &'a Tour,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        banner(f, "Input Summary")?;
        write!(f, "{}", MatrixTable(self.matrix))?;

        banner(f, "Optimal Delivery Route")?;
        writeln!(f, "Route: {}", self.tour.route)?;

        writeln!(f, "\nLocations in the route (one by one):")?;
        for location in self.tour.route.locations() {
            writeln!(f, "Location {location}")?;
        }

        line(f, '-')?;
        writeln!(f, "Minimum distance: {:.2} units", self.tour.cost)?;
        line(f, '=')
    }
}

pub fn render(matrix: &CostMatrix, tour: &Tour) -> String {
    Report { matrix, tour }.to_string()
}
