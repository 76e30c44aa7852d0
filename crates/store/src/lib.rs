// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

mod backend;
pub mod codec;
pub mod memory;
pub mod query;
pub mod view;

pub use backend::{Backend, Connection};
pub use codec::{Record, RecordCodec};
pub use lattica_type::{Error, Result};
pub use memory::{Memory, MemoryBackend};
pub use query::{Predicate, Query, Rows};
pub use view::{KeyValueView, RecordView, TypedKeyValueView, TypedRecordView};
