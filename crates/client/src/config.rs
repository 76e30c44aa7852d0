// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use serde::{Deserialize, Serialize};

/// Connection configuration for a [`Session`](crate::Session). Endpoints
/// are tried in the order given; the first one that accepts a connection
/// wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
	pub endpoints: Vec<String>,
}

impl SessionConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn endpoint(mut self, addr: impl Into<String>) -> Self {
		self.endpoints.push(addr.into());
		self
	}

	pub fn endpoints(mut self, addrs: impl IntoIterator<Item = impl Into<String>>) -> Self {
		self.endpoints.extend(addrs.into_iter().map(Into::into));
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_builder_preserves_order() {
		let config = SessionConfig::new()
			.endpoint("node-a:10800")
			.endpoints(["node-b:10800", "node-c:10800"]);
		assert_eq!(
			config.endpoints,
			vec!["node-a:10800", "node-b:10800", "node-c:10800"]
		);
	}
}
