//! Client Directory
//!
//! Contacts shown on the Clients page, with search and add.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub company: String,
    pub email: String,
    #[serde(default)]
    pub rfp_count: u32,
}

impl Client {
    /// Avatar fallback, e.g. "Elena Rodriguez" -> "ER"
    pub fn initials(&self) -> String {
        initials(&self.name)
    }

    fn matches(&self, needle: &str) -> bool {
        [&self.name, &self.company, &self.email]
            .iter()
            .any(|s| s.to_lowercase().contains(needle))
    }
}

pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Case-insensitive search over name, company and email.
/// A blank query returns everything.
pub fn filter_clients<'a>(clients: &'a [Client], query: &str) -> Vec<&'a Client> {
    let needle = query.trim().to_lowercase();
    clients
        .iter()
        .filter(|c| needle.is_empty() || c.matches(&needle))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("Name is required.")]
    MissingName,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Input from the "Add New Client" dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewClient {
    pub name: String,
    pub company: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientDirectory {
    pub clients: Vec<Client>,
}

impl ClientDirectory {
    pub fn new(clients: Vec<Client>) -> Self {
        Self { clients }
    }

    /// Next free `cli_N` id
    fn next_id(&self) -> String {
        let max = self
            .clients
            .iter()
            .filter_map(|c| c.id.strip_prefix("cli_")?.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        format!("cli_{}", max.saturating_add(1))
    }

    pub fn add(&mut self, input: NewClient) -> Result<&Client, ClientError> {
        let name = input.name.trim();
        let email = input.email.trim();
        if name.is_empty() {
            return Err(ClientError::MissingName);
        }
        let valid_email = email
            .split_once('@')
            .is_some_and(|(user, domain)| !user.is_empty() && !domain.is_empty());
        if !valid_email {
            return Err(ClientError::InvalidEmail);
        }

        let client = Client {
            id: self.next_id(),
            name: name.to_string(),
            company: input.company.trim().to_string(),
            email: email.to_string(),
            rfp_count: 0,
        };
        log::debug!("[CLIENTS] added {} ({})", client.name, client.id);
        self.clients.push(client);
        Ok(&self.clients[self.clients.len() - 1])
    }
}
