// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use crate::error::diagnostic::Diagnostic;

pub fn no_reachable_endpoint(endpoints: &[String]) -> Diagnostic {
	Diagnostic {
		code: "CONN_001".to_string(),
		message: "no reachable endpoint".to_string(),
		column: None,
		label: Some("every configured endpoint refused the connection".to_string()),
		help: Some("verify the endpoint addresses and that the cluster is running".to_string()),
		notes: endpoints.iter().map(|addr| format!("tried {}", addr)).collect(),
	}
}

pub fn endpoint_unreachable(addr: &str) -> Diagnostic {
	Diagnostic {
		code: "CONN_003".to_string(),
		message: format!("endpoint '{}' is unreachable", addr),
		column: None,
		label: Some("the endpoint refused the connection".to_string()),
		help: None,
		notes: vec![],
	}
}

pub fn session_closed() -> Diagnostic {
	Diagnostic {
		code: "CONN_002".to_string(),
		message: "session is closed".to_string(),
		column: None,
		label: Some("operations are rejected after close".to_string()),
		help: Some("open a new session to continue working with the cluster".to_string()),
		notes: vec![],
	}
}
