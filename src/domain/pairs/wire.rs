//! Wire types for the pair universe endpoint.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw pair universe payload: exchange name → quote symbol → base symbols.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllExchangesResponse(pub BTreeMap<String, BTreeMap<String, Vec<String>>>);
