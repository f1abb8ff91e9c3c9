use crate::record::SatelliteRecord;
use std::fmt;

/// Name marker carried by direct-to-cell satellites.
pub const DTC_MARKER: &str = "[DTC]";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Variant {
    Main,
    Dtc,
}

impl Variant {
    /// Case-sensitive substring test on the catalog name.
    pub fn of(name: &str) -> Self {
        if name.contains(DTC_MARKER) {
            Variant::Dtc
        } else {
            Variant::Main
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Main => write!(f, "Main"),
            Variant::Dtc => write!(f, "DTC"),
        }
    }
}

/// Records split by name marker, catalog order preserved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition<T> {
    pub main: Vec<T>,
    pub dtc: Vec<T>,
}

impl<T> Partition<T> {
    pub fn push(&mut self, variant: Variant, item: T) {
        match variant {
            Variant::Main => self.main.push(item),
            Variant::Dtc => self.dtc.push(item),
        }
    }

    pub fn get(&self, variant: Variant) -> &[T] {
        match variant {
            Variant::Main => &self.main,
            Variant::Dtc => &self.dtc,
        }
    }
}

pub fn partition(records: &[SatelliteRecord]) -> Partition<&SatelliteRecord> {
    let mut split = Partition {
        main: Vec::new(),
        dtc: Vec::new(),
    };
    for record in records {
        split.push(Variant::of(&record.name), record);
    }
    split
}
