// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use crate::error::diagnostic::Diagnostic;

pub fn backend_failure(message: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: "STORAGE_001".to_string(),
		message: message.into(),
		column: None,
		label: Some("the cluster backend reported a failure".to_string()),
		help: None,
		notes: vec![],
	}
}
