use crate::pipeline::PropertyInputs;

/// Range, default and key steps of one numeric slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderSpec {
    pub label: &'static str,
    pub help: Option<&'static str>,
    pub min: u32,
    pub max: u32,
    pub default: u32,
    /// Change applied by ←/→.
    pub step: u32,
    /// Change applied by PgUp/PgDn.
    pub big_step: u32,
}

pub const SLIDERS: [SliderSpec; 6] = [
    SliderSpec {
        label: "Lot Area (sqft)",
        help: Some("Land size impact"),
        min: 0,
        max: 50_000,
        default: 10_000,
        step: 100,
        big_step: 1_000,
    },
    SliderSpec {
        label: "Overall Quality",
        help: None,
        min: 1,
        max: 10,
        default: 5,
        step: 1,
        big_step: 1,
    },
    SliderSpec {
        label: "Year Built",
        help: None,
        min: 1870,
        max: 2010,
        default: 2000,
        step: 1,
        big_step: 10,
    },
    SliderSpec {
        label: "1st Floor SF",
        help: None,
        min: 0,
        max: 3_000,
        default: 1_200,
        step: 10,
        big_step: 100,
    },
    SliderSpec {
        label: "Living Area SF",
        help: None,
        min: 0,
        max: 5_000,
        default: 1_700,
        step: 10,
        big_step: 100,
    },
    SliderSpec {
        label: "Garage Cars",
        help: None,
        min: 0,
        max: 5,
        default: 2,
        step: 1,
        big_step: 1,
    },
];

pub const NEIGHBORHOODS: [&str; 4] = ["NAmes", "CollgCr", "OldTown", "Edwards"];

/// Focusable widgets of the form, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Slider(usize),
    Neighborhood,
    Predict,
    Reset,
}

const FIELD_COUNT: usize = SLIDERS.len() + 3;

impl Field {
    fn from_index(i: usize) -> Self {
        match i {
            i if i < SLIDERS.len() => Field::Slider(i),
            i if i == SLIDERS.len() => Field::Neighborhood,
            i if i == SLIDERS.len() + 1 => Field::Predict,
            _ => Field::Reset,
        }
    }
}

/// Widget values plus which widget has focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputForm {
    values: [u32; SLIDERS.len()],
    neighborhood: usize,
    focus: usize,
}

impl Default for InputForm {
    fn default() -> Self {
        Self::new()
    }
}

impl InputForm {
    pub fn new() -> Self {
        Self {
            values: SLIDERS.map(|s| s.default),
            neighborhood: 0,
            focus: 0,
        }
    }

    /// Restores every widget to its default. Focus is kept.
    pub fn reset(&mut self) {
        let focus = self.focus;
        *self = Self::new();
        self.focus = focus;
    }

    pub fn focus(&self) -> Field {
        Field::from_index(self.focus)
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % FIELD_COUNT;
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + FIELD_COUNT - 1) % FIELD_COUNT;
    }

    pub fn value(&self, slider: usize) -> u32 {
        self.values[slider]
    }

    pub fn neighborhood(&self) -> &'static str {
        NEIGHBORHOODS[self.neighborhood]
    }

    /// Moves the focused slider by `steps` of its step size (or of its big
    /// step when `big`), clamped to the slider range. On the selector it
    /// cycles through the neighborhoods instead.
    ///
    /// # Returns
    /// `true` if a value changed.
    pub fn nudge(&mut self, steps: i64, big: bool) -> bool {
        match self.focus() {
            Field::Slider(i) => {
                let spec = SLIDERS[i];
                let step = if big { spec.big_step } else { spec.step };
                let target = self.values[i] as i64 + steps * step as i64;
                self.set(i, target)
            }
            Field::Neighborhood => {
                let n = NEIGHBORHOODS.len() as i64;
                let next = (self.neighborhood as i64 + steps).rem_euclid(n) as usize;
                let changed = next != self.neighborhood;
                self.neighborhood = next;
                changed
            }
            Field::Predict | Field::Reset => false,
        }
    }

    /// Jumps the focused slider to its minimum or maximum.
    ///
    /// # Returns
    /// `true` if a value changed.
    pub fn jump(&mut self, to_max: bool) -> bool {
        match self.focus() {
            Field::Slider(i) => {
                let spec = SLIDERS[i];
                let target = if to_max { spec.max } else { spec.min };
                self.set(i, target as i64)
            }
            _ => false,
        }
    }

    fn set(&mut self, slider: usize, target: i64) -> bool {
        let spec = SLIDERS[slider];
        let clamped = target.clamp(spec.min as i64, spec.max as i64) as u32;
        let changed = clamped != self.values[slider];
        self.values[slider] = clamped;
        changed
    }

    /// Snapshot of the current widget values.
    pub fn inputs(&self) -> PropertyInputs {
        PropertyInputs {
            lot_area: self.values[0],
            overall_qual: self.values[1],
            year_built: self.values[2],
            first_flr_sf: self.values[3],
            gr_liv_area: self.values[4],
            garage_cars: self.values[5],
            neighborhood: self.neighborhood().to_string(),
        }
    }
}
