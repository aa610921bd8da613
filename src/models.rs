//! Data models for accounts and their labels

use std::fmt;
use serde::{Deserialize, Serialize};
use crate::business::labels::{format_labels, parse_labels};
use crate::utils::mask_string;

/// Free-text tag attached to an account
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LabelItem {
    pub text: String,
}

impl LabelItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Kind of credential an account holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountType {
    /// Directory account, authenticated elsewhere
    #[serde(rename = "LDAP")]
    Ldap,
    /// Local account with its own password
    Local,
}

impl AccountType {
    /// Whether accounts of this kind carry a password
    pub fn has_password(self) -> bool {
        matches!(self, AccountType::Local)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AccountType::Ldap => "LDAP",
            AccountType::Local => "Local",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted account record
///
/// The JSON shape is `{ "id", "labels", "type", "login", "password" }`,
/// with `password` written as `null` when absent.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique id, assigned once at creation
    pub id: String,
    /// Labels in input order
    pub labels: Vec<LabelItem>,
    /// Account kind
    #[serde(rename = "type")]
    pub kind: AccountType,
    /// Login name
    pub login: String,
    /// Password, absent for directory accounts
    pub password: Option<String>,
}

impl Account {
    /// Combine stored fields with an id
    pub fn from_new(id: impl Into<String>, account: NewAccount) -> Self {
        Self {
            id: id.into(),
            labels: account.labels,
            kind: account.kind,
            login: account.login,
            password: account.password,
        }
    }

    /// Everything except the id
    pub fn to_new(&self) -> NewAccount {
        NewAccount {
            labels: self.labels.clone(),
            kind: self.kind,
            login: self.login.clone(),
            password: self.password.clone(),
        }
    }

    /// Check whether the account carries the given label text
    pub fn has_label(&self, text: &str) -> bool {
        self.labels.iter().any(|l| l.text == text)
    }
}

// Passwords never reach log output.
impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("labels", &self.labels)
            .field("kind", &self.kind)
            .field("login", &self.login)
            .field("password", &self.password.as_deref().map(mask_string))
            .finish()
    }
}

/// Account fields without an id, as passed to add and update
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAccount {
    pub labels: Vec<LabelItem>,
    #[serde(rename = "type")]
    pub kind: AccountType,
    pub login: String,
    pub password: Option<String>,
}

impl fmt::Debug for NewAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewAccount")
            .field("labels", &self.labels)
            .field("kind", &self.kind)
            .field("login", &self.login)
            .field("password", &self.password.as_deref().map(mask_string))
            .finish()
    }
}

/// Raw user input collected by a form, before conversion into an account
///
/// Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountForm {
    /// Labels as a single `;`-delimited string
    pub labels_input: String,
    #[serde(rename = "type")]
    pub kind: AccountType,
    pub login: String,
    pub password: String,
}

impl AccountForm {
    /// Empty form for a new account of the given kind
    pub fn empty(kind: AccountType) -> Self {
        Self {
            labels_input: String::new(),
            kind,
            login: String::new(),
            password: String::new(),
        }
    }

    /// Rebuild a form from a stored account for editing
    pub fn from_account(account: &Account) -> Self {
        Self {
            labels_input: format_labels(&account.labels),
            kind: account.kind,
            login: account.login.clone(),
            password: account.password.clone().unwrap_or_default(),
        }
    }

    /// Convert the form into account fields
    ///
    /// Labels go through [`parse_labels`]. LDAP accounts drop the password.
    pub fn to_new_account(&self) -> NewAccount {
        NewAccount {
            labels: parse_labels(&self.labels_input),
            kind: self.kind,
            login: self.login.clone(),
            password: self.kind.has_password().then(|| self.password.clone()),
        }
    }
}
