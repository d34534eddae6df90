#[cfg(test)]
mod tests {
    use crate::transactions::{NewTransaction, PaymentMethod, RowOperation};
    use rust_decimal_macros::dec;

    fn new_transaction() -> NewTransaction {
        NewTransaction {
            member_id: "m-1".to_string(),
            amount: dec!(10000),
            discount_percent: dec!(10),
            discount_amount: dec!(1000),
            final_amount: dec!(9000),
            payment_method: PaymentMethod::Card,
            row_operation: RowOperation::Insert,
        }
    }

    #[test]
    fn test_new_transaction_valid() {
        assert!(new_transaction().validate().is_ok());
    }

    #[test]
    fn test_new_transaction_rejects_inconsistent_amounts() {
        let mut t = new_transaction();
        t.final_amount = dec!(9500);
        assert!(t.validate().is_err());
    }

    #[test]
    fn test_new_transaction_rejects_negative_amount() {
        let mut t = new_transaction();
        t.amount = dec!(-1);
        t.discount_amount = dec!(0);
        t.final_amount = dec!(-1);
        assert!(t.validate().is_err());
    }

    #[test]
    fn test_payment_method_wire_format() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::BankTransfer).unwrap(),
            "\"bank-transfer\""
        );
        assert_eq!("card".parse::<PaymentMethod>().unwrap(), PaymentMethod::Card);
        assert!("cheque".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn test_row_operation_tags() {
        assert_eq!(RowOperation::Insert.as_str(), "I");
        assert_eq!(RowOperation::Update.as_str(), "U");
        assert_eq!(RowOperation::Delete.as_str(), "D");
        assert_eq!("D".parse::<RowOperation>().unwrap(), RowOperation::Delete);
        assert_eq!(
            serde_json::to_string(&RowOperation::Insert).unwrap(),
            "\"I\""
        );
    }
}
