#[cfg(test)]
mod tests {
    use crate::onboarding::{
        compute_discount, Discount, OnboardingMode, OnboardingState, OnboardingStep, Ownership,
    };
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    // ==================== Discount arithmetic ====================

    #[test]
    fn test_compute_discount_ten_percent() {
        let b = compute_discount(dec!(10000), dec!(10));
        assert_eq!(b.amount, dec!(10000));
        assert_eq!(b.discount_amount, dec!(1000));
        assert_eq!(b.final_amount, dec!(9000));
    }

    #[test]
    fn test_compute_discount_zero_and_full() {
        let none = compute_discount(dec!(4500), dec!(0));
        assert_eq!(none.discount_amount, dec!(0));
        assert_eq!(none.final_amount, dec!(4500));

        let full = compute_discount(dec!(4500), dec!(100));
        assert_eq!(full.discount_amount, dec!(4500));
        assert_eq!(full.final_amount, dec!(0));
    }

    #[test]
    fn test_compute_discount_fractional_percent() {
        let b = compute_discount(dec!(999), dec!(2.5));
        assert_eq!(b.discount_amount, dec!(24.975));
        assert_eq!(b.final_amount, dec!(974.025));
    }

    proptest! {
        #[test]
        fn final_amount_matches_closed_form(price in 0u64..1_000_000_000, percent in 0u32..=100) {
            let p = Decimal::from(price);
            let d = Decimal::from(percent);
            let b = compute_discount(p, d);

            // finalAmount = p * (1 - d/100), exactly.
            prop_assert_eq!(b.final_amount, p * (Decimal::ONE - d / Decimal::ONE_HUNDRED));
            // discountAmount = p - finalAmount, exactly.
            prop_assert_eq!(b.discount_amount, p - b.final_amount);
        }
    }

    // ==================== Discount selection ====================

    #[test]
    fn test_discount_tier_percentages() {
        assert_eq!(Discount::None.percent(), dec!(0));
        assert_eq!(Discount::Tier5.percent(), dec!(5));
        assert_eq!(Discount::Tier10.percent(), dec!(10));
        assert_eq!(Discount::Custom(dec!(33.3)).percent(), dec!(33.3));
    }

    #[test]
    fn test_discount_custom_bounds() {
        assert!(Discount::Custom(dec!(0)).validate().is_ok());
        assert!(Discount::Custom(dec!(100)).validate().is_ok());
        assert!(Discount::Custom(dec!(100.01)).validate().is_err());
        assert!(Discount::Custom(dec!(-1)).validate().is_err());
    }

    // ==================== Step machine ====================

    #[test]
    fn test_state_starts_at_personal_info() {
        let state = OnboardingState::new(OnboardingMode::Create);
        assert_eq!(state.step, OnboardingStep::PersonalInfo);
        assert!(state.personal.is_none());
        assert!(state.payment.is_none());
    }

    #[test]
    fn test_expect_step_rejects_out_of_order_submission() {
        let state = OnboardingState::new(OnboardingMode::Create);
        assert!(state.expect_step(OnboardingStep::PersonalInfo).is_ok());
        assert!(state.expect_step(OnboardingStep::Payment).is_err());
    }

    #[test]
    fn test_back_navigation_keeps_data_and_stops_at_edges() {
        let mut state = OnboardingState::new(OnboardingMode::Create);
        state.step = OnboardingStep::Plan;
        state.image_path = Some("profile-images/x.jpg".to_string());

        let state = state.back();
        assert_eq!(state.step, OnboardingStep::Medical);
        // An already-uploaded image is kept, not retracted.
        assert_eq!(state.image_path.as_deref(), Some("profile-images/x.jpg"));

        let state = state.back().back();
        assert_eq!(state.step, OnboardingStep::PersonalInfo);

        let mut done = OnboardingState::new(OnboardingMode::Create);
        done.step = OnboardingStep::Done;
        assert_eq!(done.back().step, OnboardingStep::Done);
    }

    #[test]
    fn test_state_survives_serialization() {
        let mut state = OnboardingState::new(OnboardingMode::Edit {
            member_id: "m-1".to_string(),
        });
        state.step = OnboardingStep::Medical;

        let json = serde_json::to_string(&state).unwrap();
        let parked: OnboardingState = serde_json::from_str(&json).unwrap();
        assert_eq!(parked, state);
    }

    #[test]
    fn test_ownership_dependent_flag() {
        assert!(!Ownership::Sole.is_dependent());
        assert!(!Ownership::Primary.is_dependent());
        assert!(Ownership::DependentOf {
            owner_id: "m-9".to_string()
        }
        .is_dependent());
    }
}
