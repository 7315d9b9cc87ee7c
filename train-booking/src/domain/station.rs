//! Station enumeration.

use std::fmt;

/// Error returned when parsing an unknown station name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown station: {name:?}")]
pub struct InvalidStation {
    name: String,
}

impl InvalidStation {
    /// The rejected input.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A stop on the network.
///
/// The set of stations is closed: anything not listed here cannot appear on
/// a route. Names are the upper-case identifiers used when a route is
/// stored as text, and parsing is exact so that a stored route always reads
/// back as the same stations.
///
/// # Examples
///
/// ```
/// use train_booking::domain::Station;
///
/// let delhi = Station::parse("DELHI").unwrap();
/// assert_eq!(delhi, Station::Delhi);
/// assert_eq!(delhi.name(), "DELHI");
///
/// // No case folding
/// assert!(Station::parse("Delhi").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Station {
    Agra,
    Ahmedabad,
    Bangalore,
    Bhopal,
    Chandigarh,
    Chennai,
    Delhi,
    Goa,
    Hyderabad,
    Jaipur,
    Kanpur,
    Kolkata,
    Lucknow,
    Mumbai,
    Nagpur,
    Patna,
    Pune,
    Ranchi,
}

impl Station {
    /// Every station, in declaration order.
    pub const ALL: [Station; 18] = [
        Station::Agra,
        Station::Ahmedabad,
        Station::Bangalore,
        Station::Bhopal,
        Station::Chandigarh,
        Station::Chennai,
        Station::Delhi,
        Station::Goa,
        Station::Hyderabad,
        Station::Jaipur,
        Station::Kanpur,
        Station::Kolkata,
        Station::Lucknow,
        Station::Mumbai,
        Station::Nagpur,
        Station::Patna,
        Station::Pune,
        Station::Ranchi,
    ];

    /// Parse a station from its stored name.
    pub fn parse(s: &str) -> Result<Self, InvalidStation> {
        Self::ALL
            .iter()
            .copied()
            .find(|station| station.name() == s)
            .ok_or_else(|| InvalidStation { name: s.to_string() })
    }

    /// Returns the stored name of this station.
    pub fn name(&self) -> &'static str {
        match self {
            Station::Agra => "AGRA",
            Station::Ahmedabad => "AHMEDABAD",
            Station::Bangalore => "BANGALORE",
            Station::Bhopal => "BHOPAL",
            Station::Chandigarh => "CHANDIGARH",
            Station::Chennai => "CHENNAI",
            Station::Delhi => "DELHI",
            Station::Goa => "GOA",
            Station::Hyderabad => "HYDERABAD",
            Station::Jaipur => "JAIPUR",
            Station::Kanpur => "KANPUR",
            Station::Kolkata => "KOLKATA",
            Station::Lucknow => "LUCKNOW",
            Station::Mumbai => "MUMBAI",
            Station::Nagpur => "NAGPUR",
            Station::Patna => "PATNA",
            Station::Pune => "PUNE",
            Station::Ranchi => "RANCHI",
        }
    }
}

impl fmt::Debug for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station({})", self.name())
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
