//! Default entity models and the factory that builds them.
//!
//! [`StandardFactory`] owns the coercion policy the loaders deliberately stay out of:
//!
//! - empty `name` / `diameter` mean "unknown" (`None`)
//! - `pha` is hazardous only for the token `Y`; anything else (including empty) is not
//! - `cd` uses the fixed calendar format `2025-Jan-01 00:00`

use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::factory::{ApproachFactory, BodyFactory, FieldError};
use crate::types::ApproachArgs;

/// Input format of close-approach calendar dates.
pub const CD_FORMAT: &str = "%Y-%b-%d %H:%M";

/// Output format used when rendering approach times.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parse a close-approach calendar date (`2025-Jan-01 00:00`).
pub fn cd_to_datetime(calendar_date: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(calendar_date, CD_FORMAT)
}

/// Render a datetime as `YYYY-MM-DD hh:mm`.
pub fn datetime_to_str(dt: &NaiveDateTime) -> String {
    dt.format(TIME_FORMAT).to_string()
}

/// A near-Earth object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearEarthObject {
    /// Primary designation; unique per object.
    pub designation: String,
    /// IAU name, if any.
    pub name: Option<String>,
    /// Diameter in km, if known.
    pub diameter: Option<f64>,
    /// Whether the object is potentially hazardous.
    pub hazardous: bool,
}

impl NearEarthObject {
    /// `"433 (Eros)"`, or just the designation when unnamed.
    pub fn fullname(&self) -> String {
        match &self.name {
            Some(name) => format!("{} ({name})", self.designation),
            None => self.designation.clone(),
        }
    }
}

impl fmt::Display for NearEarthObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hazard = if self.hazardous { "is" } else { "is not" };
        match self.diameter {
            Some(d) => write!(
                f,
                "NEO {} has a diameter of {d:.3} km and {hazard} potentially hazardous.",
                self.fullname()
            ),
            None => write!(
                f,
                "NEO {} has an unknown diameter and {hazard} potentially hazardous.",
                self.fullname()
            ),
        }
    }
}

/// A close approach of a near-Earth object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloseApproach {
    /// Designation of the approaching object (join key to [`NearEarthObject::designation`]).
    pub designation: String,
    /// Time of closest approach (TDB).
    pub time: NaiveDateTime,
    /// Nominal approach distance in au.
    pub distance: f64,
    /// Velocity relative to the approach body in km/s.
    pub velocity: f64,
}

impl CloseApproach {
    pub fn time_str(&self) -> String {
        datetime_to_str(&self.time)
    }
}

impl fmt::Display for CloseApproach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "At {}, '{}' approaches Earth at a distance of {:.2} au and a velocity of {:.2} km/s.",
            self.time_str(),
            self.designation,
            self.distance,
            self.velocity
        )
    }
}

/// Builds [`NearEarthObject`]s and [`CloseApproach`]es from raw loader values.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardFactory;

impl BodyFactory for StandardFactory {
    type Output = NearEarthObject;

    fn build(
        &self,
        designation: &str,
        name: &str,
        diameter: &str,
        hazardous: &str,
    ) -> Result<NearEarthObject, FieldError> {
        let diameter = if diameter.trim().is_empty() {
            None
        } else {
            Some(parse_f64("diameter", diameter)?)
        };

        Ok(NearEarthObject {
            designation: designation.to_string(),
            name: (!name.is_empty()).then(|| name.to_string()),
            diameter,
            hazardous: hazardous == "Y",
        })
    }
}

impl ApproachFactory for StandardFactory {
    type Output = CloseApproach;

    fn build(&self, kwargs: &ApproachArgs<'_>) -> Result<CloseApproach, FieldError> {
        let time = cd_to_datetime(&kwargs.cd).map_err(|e| FieldError::new("cd", kwargs.cd.as_ref(), e))?;
        Ok(CloseApproach {
            designation: kwargs.des.to_string(),
            time,
            distance: parse_f64("dist", &kwargs.dist)?,
            velocity: parse_f64("v_rel", &kwargs.v_rel)?,
        })
    }
}

fn parse_f64(column: &str, raw: &str) -> Result<f64, FieldError> {
    raw.trim().parse::<f64>().map_err(|e| FieldError::new(column, raw, e))
}
