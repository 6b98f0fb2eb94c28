use std::{fmt, str::FromStr};

use crate::common::{error::InputError, money::Money};

/// The closed set of things a user can ask the bank to do.
///
/// Menu keys, form buttons and script rows all resolve to one of these
/// before any ledger code runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    CreateAccount,
    Deposit,
    Withdraw,
    Transfer,
    TopUpPhone,
    DeleteAccount,
}

impl ActionKind {
    /// In menu order.
    pub const ALL: [ActionKind; 6] = [
        ActionKind::CreateAccount,
        ActionKind::Deposit,
        ActionKind::Withdraw,
        ActionKind::Transfer,
        ActionKind::TopUpPhone,
        ActionKind::DeleteAccount,
    ];

    pub fn menu_key(self) -> &'static str {
        match self {
            ActionKind::CreateAccount => "1",
            ActionKind::Deposit => "2",
            ActionKind::Withdraw => "3",
            ActionKind::Transfer => "4",
            ActionKind::TopUpPhone => "5",
            ActionKind::DeleteAccount => "6",
        }
    }

    pub fn from_menu_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.menu_key() == key.trim())
    }

    /// Human label used by the menu.
    pub fn label(self) -> &'static str {
        match self {
            ActionKind::CreateAccount => "Create Account",
            ActionKind::Deposit => "Deposit",
            ActionKind::Withdraw => "Withdraw",
            ActionKind::Transfer => "Transfer",
            ActionKind::TopUpPhone => "Phone Top-up",
            ActionKind::DeleteAccount => "Delete Account",
        }
    }

    /// Short name used by form buttons and script rows.
    pub fn name(self) -> &'static str {
        match self {
            ActionKind::CreateAccount => "create",
            ActionKind::Deposit => "deposit",
            ActionKind::Withdraw => "withdraw",
            ActionKind::Transfer => "transfer",
            ActionKind::TopUpPhone => "top-up",
            ActionKind::DeleteAccount => "delete",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = s.trim().to_ascii_lowercase();
        match kind.as_str() {
            "create" => Ok(ActionKind::CreateAccount),
            "deposit" => Ok(ActionKind::Deposit),
            "withdraw" => Ok(ActionKind::Withdraw),
            "transfer" => Ok(ActionKind::Transfer),
            "top-up" | "topup" => Ok(ActionKind::TopUpPhone),
            "delete" => Ok(ActionKind::DeleteAccount),
            other => Err(format!("unknown action: {other}")),
        }
    }
}

/// Raw text collected by an adapter before validation.
///
/// `secondary` is read per action: the holder's name for `create`, the
/// destination account for `transfer` and the phone number for `top-up`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionRequest {
    pub account: String,
    pub secondary: String,
    pub amount: String,
}

/// A validated request, ready for the processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    CreateAccount { account_number: String, name: String },
    Deposit { account_number: String, amount: Money },
    Withdraw { account_number: String, amount: Money },
    Transfer { from: String, to: String, amount: Money },
    TopUpPhone { phone_number: String, amount: Money },
    DeleteAccount { account_number: String },
}

impl Action {
    /// Builds the action for `kind` from the raw fields, keeping only the
    /// ones that action reads. Text fields are trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use bank_sim::common::action::{Action, ActionKind, ActionRequest};
    /// use bank_sim::common::money::Money;
    ///
    /// let request = ActionRequest {
    ///     account: "A1".into(),
    ///     secondary: "B1".into(),
    ///     amount: "40".into(),
    /// };
    /// let action = Action::parse(ActionKind::Transfer, &request).unwrap();
    /// assert_eq!(
    ///     action,
    ///     Action::Transfer { from: "A1".into(), to: "B1".into(), amount: Money::from_units(40) }
    /// );
    /// ```
    pub fn parse(kind: ActionKind, request: &ActionRequest) -> Result<Self, InputError> {
        let account = request.account.trim().to_string();
        let secondary = request.secondary.trim().to_string();

        let action = match kind {
            ActionKind::CreateAccount => Action::CreateAccount {
                account_number: account,
                name: secondary,
            },
            ActionKind::Deposit => Action::Deposit {
                account_number: account,
                amount: parse_amount(&request.amount)?,
            },
            ActionKind::Withdraw => Action::Withdraw {
                account_number: account,
                amount: parse_amount(&request.amount)?,
            },
            ActionKind::Transfer => Action::Transfer {
                from: account,
                to: secondary,
                amount: parse_amount(&request.amount)?,
            },
            ActionKind::TopUpPhone => Action::TopUpPhone {
                phone_number: secondary,
                amount: parse_amount(&request.amount)?,
            },
            ActionKind::DeleteAccount => Action::DeleteAccount {
                account_number: account,
            },
        };
        Ok(action)
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            Action::CreateAccount { .. } => ActionKind::CreateAccount,
            Action::Deposit { .. } => ActionKind::Deposit,
            Action::Withdraw { .. } => ActionKind::Withdraw,
            Action::Transfer { .. } => ActionKind::Transfer,
            Action::TopUpPhone { .. } => ActionKind::TopUpPhone,
            Action::DeleteAccount { .. } => ActionKind::DeleteAccount,
        }
    }
}

fn parse_amount(raw: &str) -> Result<Money, InputError> {
    raw.parse()
        .map_err(|_| InputError::InvalidAmount(raw.trim().to_string()))
}
