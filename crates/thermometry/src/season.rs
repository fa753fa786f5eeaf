use crate::mapping::Band;
use crate::range::TemperatureRange;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [
        Season::Spring,
        Season::Summer,
        Season::Autumn,
        Season::Winter,
    ];

    /// Band the season draws its target temperatures from.
    pub fn band(&self) -> Band {
        match self {
            Season::Winter => Band::Cold,
            Season::Spring | Season::Autumn => Band::Mild,
            Season::Summer => Band::Hot,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
        }
    }

    /// Location caption shown while this season is active, e.g. "Seoul in midwinter".
    pub fn location_label(&self, city: &str) -> String {
        match self {
            Season::Spring => format!("{city} in spring"),
            Season::Summer => format!("{city} in midsummer"),
            Season::Autumn => format!("{city} in autumn"),
            Season::Winter => format!("{city} in midwinter"),
        }
    }

    /// Draw a uniformly random target temperature in `[low, high)` of this season's band.
    pub fn draw_target<R: Rng + ?Sized>(&self, rng: &mut R, range: &TemperatureRange) -> f32 {
        let (low, high) = range.band_bounds(self.band());
        if high <= low {
            return low;
        }
        let target = rng.random_range(low..high);
        // Float rounding can land on `high`.
        if target < high { target } else { low }
    }
}
