use serde::Deserialize;

use super::error::IoError;
use crate::domain::{AccountNumber, AmountType, Customer, Operation};

/// Raw CSV record as read from a script
///
/// Columns: `type,account,amount,target,name,address,phone`. Only `type` and
/// `account` are always required; the rest depend on the operation.
#[derive(Debug, Default, Deserialize)]
pub struct RawOperationRecord {
    #[serde(rename = "type")]
    pub op_type: String,
    pub account: AccountNumber,
    pub amount: Option<String>,
    pub target: Option<AccountNumber>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

impl RawOperationRecord {
    /// Parse this raw record into a strongly-typed Operation
    pub fn parse<A: AmountType>(self) -> Result<Operation<A>, IoError> {
        let op_type_lower = self.op_type.trim().to_lowercase();
        let number = self.account;

        match op_type_lower.as_str() {
            "open" => {
                let balance = match self.amount {
                    Some(text) => parse_amount(text)?,
                    None => A::zero(),
                };
                let customer = Customer::new(
                    self.name.unwrap_or_default(),
                    self.address.unwrap_or_default(),
                    self.phone.unwrap_or_default(),
                );
                Ok(Operation::Open {
                    number,
                    customer,
                    balance,
                })
            }
            "deposit" => Ok(Operation::Deposit {
                number,
                amount: required_amount(self.amount, "deposit")?,
            }),
            "withdraw" | "withdrawal" => Ok(Operation::Withdraw {
                number,
                amount: required_amount(self.amount, "withdraw")?,
            }),
            "transfer" => {
                let target = self.target.ok_or_else(|| {
                    IoError::MissingField("target required for transfer".to_string())
                })?;
                Ok(Operation::Transfer {
                    number,
                    target,
                    amount: required_amount(self.amount, "transfer")?,
                })
            }
            _ => Err(IoError::InvalidOperationType(self.op_type)),
        }
    }
}

fn required_amount<A: AmountType>(amount: Option<String>, op: &str) -> Result<A, IoError> {
    let text = amount.ok_or_else(|| IoError::MissingField(format!("amount required for {op}")))?;
    parse_amount(text)
}

fn parse_amount<A: AmountType>(text: String) -> Result<A, IoError> {
    A::from_decimal_str(&text).map_err(|_| IoError::InvalidAmount(text))
}
