use crate::calculator::{CalculationInput, NewCalculationInput};
use crate::errors::ValidationError;

use super::policy_model::ContributionPolicy;

impl ContributionPolicy {
    /// Checks `input` against the policy and reports the first rule it breaks.
    ///
    /// Rules are checked in a fixed order: contribution range, then minimum
    /// period, then maximum period.
    pub fn check(&self, input: &CalculationInput) -> Result<(), ValidationError> {
        self.check_new(&NewCalculationInput::from(*input))
    }

    /// Same rules as [`check`](Self::check), applied to raw input before its
    /// positivity has been validated. A contribution outside the range is
    /// reported ahead of a non-positive rate.
    pub fn check_new(&self, input: &NewCalculationInput) -> Result<(), ValidationError> {
        let contribution = input.contribution_per_period;
        if contribution < self.min_contribution() || contribution > self.max_contribution() {
            return Err(ValidationError::ContributionOutOfRange {
                min: self.min_contribution(),
                max: self.max_contribution(),
            });
        }

        if input.num_periods < self.min_periods() {
            return Err(ValidationError::PeriodTooShort {
                min: self.min_periods(),
            });
        }

        if let Some(max) = self.max_periods() {
            if input.num_periods > max {
                return Err(ValidationError::PeriodTooLong { max });
            }
        }

        Ok(())
    }

    pub fn allows(&self, input: &CalculationInput) -> bool {
        self.check(input).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn input(contribution: Decimal, years: u32) -> CalculationInput {
        CalculationInput::new(contribution, years, dec!(7.1)).unwrap()
    }

    #[test]
    fn test_default_policy_accepts_scheme_limits() {
        let policy = ContributionPolicy::default();
        assert!(policy.allows(&input(dec!(500), 15)));
        assert!(policy.allows(&input(dec!(150000), 15)));
        assert!(policy.allows(&input(dec!(12000), 40)));
    }

    #[test]
    fn test_contribution_outside_range_is_rejected() {
        let policy = ContributionPolicy::default();

        let too_small = policy.check(&input(dec!(499.99), 15)).unwrap_err();
        assert_eq!(
            too_small,
            ValidationError::ContributionOutOfRange {
                min: dec!(500),
                max: dec!(150000),
            }
        );
        assert_eq!(
            too_small.to_string(),
            "Annual investment should be between ₹500 and ₹1,50,000"
        );

        assert!(policy.check(&input(dec!(150001), 15)).is_err());
    }

    #[test]
    fn test_short_period_is_rejected() {
        let err = ContributionPolicy::default()
            .check(&input(dec!(1000), 14))
            .unwrap_err();
        assert_eq!(err, ValidationError::PeriodTooShort { min: 15 });
        assert_eq!(err.to_string(), "Minimum investment period is 15 years");
    }

    #[test]
    fn test_contribution_is_checked_before_period() {
        let err = ContributionPolicy::default()
            .check(&input(dec!(100), 3))
            .unwrap_err();
        assert!(matches!(err, ValidationError::ContributionOutOfRange { .. }));
    }

    #[test]
    fn test_raw_input_is_checked_before_positivity() {
        let raw = NewCalculationInput {
            contribution_per_period: dec!(200000),
            num_periods: 15,
            annual_rate_percent: dec!(0),
        };
        assert!(matches!(
            ContributionPolicy::default().check_new(&raw).unwrap_err(),
            ValidationError::ContributionOutOfRange { .. }
        ));

        let zero_years = NewCalculationInput {
            contribution_per_period: dec!(1000),
            num_periods: 0,
            ..raw
        };
        assert_eq!(
            ContributionPolicy::default().check_new(&zero_years).unwrap_err(),
            ValidationError::PeriodTooShort { min: 15 }
        );
    }

    #[test]
    fn test_max_period() {
        let policy = ContributionPolicy::new(dec!(500), dec!(150000), 15, Some(50)).unwrap();
        assert!(policy.allows(&input(dec!(1000), 50)));
        assert_eq!(
            policy.check(&input(dec!(1000), 51)).unwrap_err(),
            ValidationError::PeriodTooLong { max: 50 }
        );
    }

    #[test]
    fn test_unrestricted_policy_accepts_anything_valid() {
        let policy = ContributionPolicy::unrestricted();
        assert!(policy.allows(&input(dec!(0.01), 1)));
        assert!(policy.allows(&input(dec!(10000000), 1)));
    }

    #[test]
    fn test_inconsistent_bounds_are_rejected() {
        assert!(ContributionPolicy::new(dec!(1000), dec!(500), 15, None).is_err());
        assert!(ContributionPolicy::new(dec!(0), dec!(500), 15, None).is_err());
        assert!(ContributionPolicy::new(dec!(500), dec!(1000), 0, None).is_err());
        assert!(ContributionPolicy::new(dec!(500), dec!(1000), 15, Some(10)).is_err());
    }
}
