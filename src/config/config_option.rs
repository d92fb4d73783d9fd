/// A configuration option, with bounds.
///
/// The bounds are advisory for values fixed at construction, and enforced for values which change during a solve (see [clamp](ConfigOption::clamp)).
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }

    /// Sets the value of the option to `value`, within the bounds of the option.
    pub fn clamp(&mut self, value: T) {
        self.value = if value < self.min {
            self.min.clone()
        } else if value > self.max {
            self.max.clone()
        } else {
            value
        };
    }
}

#[cfg(test)]
mod config_option_tests {
    use super::*;

    #[test]
    fn clamp_respects_bounds() {
        let mut option = ConfigOption {
            name: "test",
            min: 1,
            max: 6,
            value: 1,
        };

        option.clamp(9);
        assert_eq!(option.value, 6);

        option.clamp(0);
        assert_eq!(option.value, 1);

        option.clamp(4);
        assert_eq!(option.value, 4);
        assert_eq!(option.min_max(), (1, 6));
    }
}
