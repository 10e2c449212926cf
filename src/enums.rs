/// Arrangement of the L-network elements
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Topology {
    /// Shunt capacitor across the antenna, series inductor towards the source
    #[default]
    LowPass,
    /// Series inductor at the antenna, shunt capacitor at the source
    /// (reverse coax connections)
    HighPass,
}

impl Topology {
    // Convert the value of a HIGHPASS config directive into Topology type
    pub fn from_flag(flag: i64) -> Topology {
        if flag != 0 {
            Topology::HighPass
        } else {
            Topology::LowPass
        }
    }

    pub fn is_high_pass(&self) -> bool {
        *self == Topology::HighPass
    }
}
