//! Export helpers for firing solutions: plain-text range cards, JSON, and CSV.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use mortar_ballistics::{ChargeSolution, FiringSolution};
use mortar_core::Point3;
use serde::Serialize;

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

/// Serializable snapshot of one solve, independent of the solver's internal types.
#[derive(Debug, Clone, Serialize)]
pub struct RangeCard {
    pub launch: [f64; 3],
    pub target: [f64; 3],
    pub bearing_deg: f64,
    pub distance: f64,
    pub charges: Vec<ChargeRow>,
}

/// One charge line of the range card.
#[derive(Debug, Clone, Serialize)]
pub struct ChargeRow {
    pub charge: String,
    pub velocity: f64,
    pub feasible: bool,
    pub arc: Option<&'static str>,
    pub elevation_deg: Option<f64>,
    pub time_of_flight_s: Option<f64>,
}

impl From<&ChargeSolution> for ChargeRow {
    fn from(value: &ChargeSolution) -> Self {
        Self {
            charge: value.charge.to_string(),
            velocity: value.charge.velocity,
            feasible: value.is_feasible(),
            arc: value.arc.map(|a| a.branch.as_str()),
            elevation_deg: value.elevation_deg(),
            time_of_flight_s: value.time_of_flight_s(),
        }
    }
}

impl RangeCard {
    pub fn new(launch: &Point3, target: &Point3, solution: &FiringSolution) -> Self {
        Self {
            launch: launch.to_array(),
            target: target.to_array(),
            bearing_deg: solution.bearing_deg,
            distance: solution.horizontal_range,
            charges: solution.charges.iter().map(ChargeRow::from).collect(),
        }
    }
}

/// Human-readable range card, two decimals throughout.
pub mod text {
    use super::RangeCard;
    use std::io::{self, Write};

    pub fn write_card(writer: &mut dyn Write, card: &RangeCard) -> io::Result<()> {
        writeln!(writer, "Bearing: {:.2} degrees", card.bearing_deg)?;
        writeln!(writer, "Distance: {:.2} studs", card.distance)?;
        writeln!(writer)?;
        for row in &card.charges {
            match (row.elevation_deg, row.time_of_flight_s) {
                (Some(elevation), Some(tof)) => {
                    writeln!(
                        writer,
                        "Elevation Angle for {}: {:.2} degrees",
                        row.charge, elevation
                    )?;
                    writeln!(writer, "Time of Flight for {}: {:.2} seconds", row.charge, tof)?;
                }
                _ => writeln!(
                    writer,
                    "No feasible solution for {} within angle limits.",
                    row.charge
                )?,
            }
        }
        Ok(())
    }
}

/// Pretty-printed JSON document of the whole card.
pub mod json {
    use super::RangeCard;
    use std::io::{self, Write};

    pub fn write_card(writer: &mut dyn Write, card: &RangeCard) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, card)?;
        writeln!(writer)
    }
}

/// One CSV row per charge; infeasible charges leave the numeric cells empty.
pub mod csv {
    use super::{ChargeRow, RangeCard};
    use std::io::{self, Write};

    const HEADER: &str = "charge,velocity,feasible,arc,elevation_deg,time_of_flight_s";

    /// Write the standard charge-table CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    pub fn write_row(writer: &mut dyn Write, row: &ChargeRow) -> io::Result<()> {
        writeln!(
            writer,
            "{},{},{},{},{},{}",
            row.charge,
            row.velocity,
            if row.feasible { "true" } else { "false" },
            row.arc.unwrap_or(""),
            optional_cell(row.elevation_deg),
            optional_cell(row.time_of_flight_s),
        )
    }

    pub fn write_card(writer: &mut dyn Write, card: &RangeCard) -> io::Result<()> {
        write_header(writer)?;
        for row in &card.charges {
            write_row(writer, row)?;
        }
        Ok(())
    }

    fn optional_cell(value: Option<f64>) -> String {
        value.map(|v| format!("{v:.6}")).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mortar_ballistics::{ArcBranch, ArcSolution, ChargeSolution};
    use mortar_core::Charge;

    fn sample_card() -> RangeCard {
        let solution = FiringSolution {
            bearing_deg: 270.0,
            horizontal_range: 1000.0,
            charges: vec![
                ChargeSolution {
                    charge: Charge::new(0, 720.0),
                    arc: Some(ArcSolution {
                        elevation_deg: 78.880_459,
                        time_of_flight_s: 7.201_665,
                        branch: ArcBranch::High,
                    }),
                },
                ChargeSolution::infeasible(Charge::new(1, 780.0)),
            ],
        };
        RangeCard::new(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(1000.0, 0.0, 0.0),
            &solution,
        )
    }

    fn render(f: fn(&mut dyn Write, &RangeCard) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf, &sample_card()).expect("render");
        String::from_utf8(buf).expect("utf8")
    }

    #[test]
    fn text_card_matches_display_convention() {
        let out = render(text::write_card);
        assert_eq!(
            out,
            "Bearing: 270.00 degrees\n\
             Distance: 1000.00 studs\n\
             \n\
             Elevation Angle for C0: 78.88 degrees\n\
             Time of Flight for C0: 7.20 seconds\n\
             No feasible solution for C1 within angle limits.\n"
        );
    }

    #[test]
    fn csv_leaves_infeasible_cells_empty() {
        let out = render(csv::write_card);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "charge,velocity,feasible,arc,elevation_deg,time_of_flight_s"
        );
        assert!(lines[1].starts_with("C0,720,true,high,78.880459,"));
        assert_eq!(lines[2], "C1,780,false,,,");
    }

    #[test]
    fn json_uses_null_for_infeasible() {
        let out = render(json::write_card);
        let value: serde_json::Value = serde_json::from_str(&out).expect("json");
        assert_eq!(value["charges"][1]["feasible"], false);
        assert!(value["charges"][1]["elevation_deg"].is_null());
        assert_eq!(value["charges"][0]["arc"], "high");
        assert_eq!(value["launch"][0], 0.0);
    }
}
