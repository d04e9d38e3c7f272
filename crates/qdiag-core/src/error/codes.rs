//! Error code taxonomy
//!
//! Codes are a stable external contract: clients match on them, so a code is
//! never renumbered or reused once released. Each code lives inside the
//! numeric range of the subsystem that raises it.
//!
//! Definitions are grouped per subsystem below. Adding a code means adding a
//! constant here and listing it in [`crate::error::registry::TAXONOMY`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Numeric error code, unique across the whole engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorCode(pub u32);

impl ErrorCode {
    /// Wrap a raw code value
    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    /// The raw code value
    pub const fn get(self) -> u32 {
        self.0
    }

    /// The namespace whose range contains this code, if any
    pub fn namespace(self) -> Option<Namespace> {
        Namespace::of(self)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ErrorCode {
    fn from(code: u32) -> Self {
        Self(code)
    }
}

impl FromStr for ErrorCode {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(Self)
    }
}

/// Subsystem namespaces and their reserved code ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Namespace {
    /// Interactive shell client
    Shell,
    /// Request service and HTTP I/O
    Service,
    /// Clustering, accounting and admin endpoints
    Admin,
    /// Parsing and semantic checks
    Parse,
    /// Planning and prepared statements
    Plan,
    /// Execution operators and expression evaluation
    Execution,
    /// Task scheduler and statement rewrite
    Scheduler,
    /// Schema inference
    Inference,
    /// Datastore adapters, authorization and functions
    Datastore,
    /// Sequential scan
    SequentialScan,
    /// Transactions
    Transaction,
    /// Data dictionary and system collections
    Dictionary,
    /// Virtual keyspaces
    VirtualKeyspace,
    /// Sequences
    Sequence,
}

impl Namespace {
    /// Every namespace in ascending range order
    pub const ALL: [Namespace; 14] = [
        Namespace::Shell,
        Namespace::Service,
        Namespace::Admin,
        Namespace::Parse,
        Namespace::Plan,
        Namespace::Execution,
        Namespace::Scheduler,
        Namespace::Inference,
        Namespace::Datastore,
        Namespace::SequentialScan,
        Namespace::Transaction,
        Namespace::Dictionary,
        Namespace::VirtualKeyspace,
        Namespace::Sequence,
    ];

    /// Inclusive lower and upper bound of the namespace
    pub const fn bounds(self) -> (u32, u32) {
        match self {
            Self::Shell => (100, 199),
            Self::Service => (1000, 1999),
            Self::Admin => (2000, 2999),
            Self::Parse => (3000, 3999),
            Self::Plan => (4000, 4999),
            Self::Execution => (5000, 5999),
            Self::Scheduler => (6000, 6999),
            Self::Inference => (7000, 7999),
            Self::Datastore => (10000, 13999),
            Self::SequentialScan => (16000, 16999),
            Self::Transaction => (17000, 17099),
            Self::Dictionary => (18000, 18999),
            Self::VirtualKeyspace => (19000, 19099),
            Self::Sequence => (19100, 19199),
        }
    }

    /// The reserved code range
    pub fn range(self) -> RangeInclusive<u32> {
        let (lo, hi) = self.bounds();
        lo..=hi
    }

    /// Whether `code` falls inside this namespace
    pub fn contains(self, code: ErrorCode) -> bool {
        self.range().contains(&code.get())
    }

    /// Find the namespace containing `code`
    pub fn of(code: ErrorCode) -> Option<Self> {
        Self::ALL.into_iter().find(|ns| ns.contains(code))
    }

    /// Stable lowercase name
    pub fn name(self) -> &'static str {
        match self {
            Self::Shell => "shell",
            Self::Service => "service",
            Self::Admin => "admin",
            Self::Parse => "parse",
            Self::Plan => "plan",
            Self::Execution => "execution",
            Self::Scheduler => "scheduler",
            Self::Inference => "inference",
            Self::Datastore => "datastore",
            Self::SequentialScan => "sequential_scan",
            Self::Transaction => "transaction",
            Self::Dictionary => "dictionary",
            Self::VirtualKeyspace => "virtual_keyspace",
            Self::Sequence => "sequence",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Namespace {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|ns| ns.name() == wanted)
            .ok_or_else(|| format!("unknown namespace '{}'", s))
    }
}

/// A registered error condition: its code, its symbolic key, and the
/// namespace it is declared in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorDef {
    pub namespace: Namespace,
    pub code: ErrorCode,
    pub key: &'static str,
}

impl ErrorDef {
    pub const fn new(namespace: Namespace, code: u32, key: &'static str) -> Self {
        Self {
            namespace,
            code: ErrorCode(code),
            key,
        }
    }
}

impl fmt::Display for ErrorDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code, self.key)
    }
}

/// Shell client errors (100-199)
pub mod shell {
    use super::{ErrorDef, Namespace::Shell};

    pub const CONNECTION_REFUSED: ErrorDef = ErrorDef::new(Shell, 100, "shell.connection.refused");
    pub const UNSUPPORTED_PROTOCOL: ErrorDef =
        ErrorDef::new(Shell, 101, "shell.unsupported.protocol");
    pub const NO_SUCH_HOST: ErrorDef = ErrorDef::new(Shell, 102, "shell.no.such.host");
    pub const NO_CONNECTION: ErrorDef =
        ErrorDef::new(Shell, 107, "shell.not.connected.to.any.instance");
    pub const INVALID_URL: ErrorDef = ErrorDef::new(Shell, 109, "shell.invalid.url");
    pub const FILE_OPEN: ErrorDef = ErrorDef::new(Shell, 118, "shell.unable.to.open.file");
    pub const FILE_CLOSE: ErrorDef = ErrorDef::new(Shell, 119, "shell.unable.to.close.file");
    pub const NO_SUCH_COMMAND: ErrorDef = ErrorDef::new(Shell, 136, "shell.no.such.command");
    pub const OPERATION_TIMEOUT: ErrorDef = ErrorDef::new(Shell, 170, "shell.operation.timeout");
    pub const UNKNOWN: ErrorDef = ErrorDef::new(Shell, 199, "shell.internal.error.uncaptured");
}

/// Request service errors (1000-1999)
pub mod service {
    use super::{ErrorDef, Namespace::Service};

    pub const READONLY: ErrorDef = ErrorDef::new(Service, 1000, "service.io.readonly");
    pub const HTTP_UNSUPPORTED_METHOD: ErrorDef =
        ErrorDef::new(Service, 1010, "service.io.http.unsupported_method");
    pub const NOT_IMPLEMENTED: ErrorDef =
        ErrorDef::new(Service, 1020, "service.io.request.unimplemented");
    pub const UNRECOGNIZED_VALUE: ErrorDef =
        ErrorDef::new(Service, 1030, "service.io.request.unrecognized_value");
    pub const BAD_VALUE: ErrorDef = ErrorDef::new(Service, 1040, "service.io.request.bad_value");
    pub const MISSING_VALUE: ErrorDef =
        ErrorDef::new(Service, 1050, "service.io.request.missing_value");
    pub const MULTIPLE_VALUES: ErrorDef =
        ErrorDef::new(Service, 1060, "service.io.request.multiple_values");
    pub const UNRECOGNIZED_PARAMETER: ErrorDef =
        ErrorDef::new(Service, 1065, "service.io.request.unrecognized_parameter");
    pub const TYPE_MISMATCH: ErrorDef =
        ErrorDef::new(Service, 1070, "service.io.request.type_mismatch");
    pub const TIMEOUT: ErrorDef = ErrorDef::new(Service, 1080, "service.io.request.timeout");
    pub const INVALID_VALUE: ErrorDef =
        ErrorDef::new(Service, 1090, "service.io.request.invalid_value");
    pub const INVALID_JSON: ErrorDef =
        ErrorDef::new(Service, 1100, "service.io.response.invalid_json");
    pub const CLIENT_ID: ErrorDef = ErrorDef::new(Service, 1110, "service.io.response.client_id");
    pub const MEDIA_TYPE: ErrorDef = ErrorDef::new(Service, 1120, "service.io.request.media_type");
    pub const SHUTTING_DOWN: ErrorDef = ErrorDef::new(Service, 1180, "service.shutting_down");
    pub const SHUT_DOWN: ErrorDef = ErrorDef::new(Service, 1181, "service.shut_down");
    pub const UNAVAILABLE: ErrorDef = ErrorDef::new(Service, 1182, "service.unavailable");
    pub const REQUEST_ERROR_LIMIT: ErrorDef =
        ErrorDef::new(Service, 1195, "service.request.error_limit");
    pub const REQUEST_QUEUE_FULL: ErrorDef =
        ErrorDef::new(Service, 1201, "service.request.queue_full");
}

/// Clustering and admin errors (2000-2999)
pub mod admin {
    use super::{ErrorDef, Namespace::Admin};

    pub const CONNECTION: ErrorDef =
        ErrorDef::new(Admin, 2000, "admin.clustering.connection_error");
    pub const INVALID_URL: ErrorDef = ErrorDef::new(Admin, 2010, "admin.invalid_url");
    pub const DECODING: ErrorDef = ErrorDef::new(Admin, 2020, "admin.json_decoding_error");
    pub const ENCODING: ErrorDef = ErrorDef::new(Admin, 2030, "admin.json_encoding_error");
    pub const UNKNOWN_SETTING: ErrorDef = ErrorDef::new(Admin, 2031, "admin.unknown_setting");
    pub const SETTING_TYPE: ErrorDef = ErrorDef::new(Admin, 2032, "admin.setting_type_error");
    pub const GET_CLUSTER: ErrorDef =
        ErrorDef::new(Admin, 2040, "admin.clustering.get_cluster_error");
    pub const NO_SUCH_NODE: ErrorDef = ErrorDef::new(Admin, 2080, "admin.clustering.no_such_node");
    pub const AUTH: ErrorDef = ErrorDef::new(Admin, 2120, "admin.clustering.authorize");
    pub const ENDPOINT: ErrorDef = ErrorDef::new(Admin, 2130, "admin.service.http_endpoint");
    pub const SSL_NOT_ENABLED: ErrorDef = ErrorDef::new(Admin, 2140, "admin.service.ssl_cert");
}

/// Parse and semantic errors (3000-3999)
pub mod parse {
    use super::{ErrorDef, Namespace::Parse};

    pub const SYNTAX: ErrorDef = ErrorDef::new(Parse, 3000, "parse.syntax_error");
    pub const INVALID_ESCAPE_SEQUENCE: ErrorDef =
        ErrorDef::new(Parse, 3006, "parse.invalid_escape_sequence");
    pub const MISSING_CLOSING_QUOTE: ErrorDef =
        ErrorDef::new(Parse, 3008, "parse.missing_closing_quote");
    pub const SEMANTICS: ErrorDef = ErrorDef::new(Parse, 3100, "semantics.error");
    pub const JOIN_NEST_NO_JOIN_HINT: ErrorDef =
        ErrorDef::new(Parse, 3110, "semantics.visit_join.no_join_hint");
    pub const MERGE_MISSING_SOURCE: ErrorDef =
        ErrorDef::new(Parse, 3170, "semantics.visit_merge.merge_missing_source");
    pub const WINDOW_SEMANTIC: ErrorDef = ErrorDef::new(Parse, 3220, "semantics.window");
    pub const ENTERPRISE_FEATURE: ErrorDef =
        ErrorDef::new(Parse, 3230, "semantics.enterprise_feature");
}

/// Planner errors (4000-4999)
pub mod plan {
    use super::{ErrorDef, Namespace::Plan};

    pub const PLAN: ErrorDef = ErrorDef::new(Plan, 4000, "plan.error");
    pub const REPREPARE: ErrorDef = ErrorDef::new(Plan, 4001, "plan.reprepare_error");
    pub const NO_TERM_NAME: ErrorDef = ErrorDef::new(Plan, 4010, "plan.no_term_name");
    pub const DUPLICATE_ALIAS: ErrorDef = ErrorDef::new(Plan, 4020, "plan.duplicate_alias");
    pub const SUBQUERY_MISSING_KEYS: ErrorDef =
        ErrorDef::new(Plan, 4030, "plan.build_select.subquery_missing_keys");
    pub const NO_SUCH_PREPARED: ErrorDef =
        ErrorDef::new(Plan, 4040, "plan.build_prepared.no_such_name");
    pub const UNRECOGNIZED_PREPARED: ErrorDef =
        ErrorDef::new(Plan, 4050, "plan.build_prepared.unrecognized_prepared");
    pub const PREPARED_DECODING: ErrorDef =
        ErrorDef::new(Plan, 4070, "plan.build_prepared.decoding");
    pub const NOT_GROUP_KEY_OR_AGG: ErrorDef =
        ErrorDef::new(Plan, 4210, "plan.not_group_key_or_agg");
    pub const INDEX_ALREADY_EXISTS: ErrorDef =
        ErrorDef::new(Plan, 4300, "plan.new_index_already_exists");
    pub const INTERNAL: ErrorDef = ErrorDef::new(Plan, 4321, "plan.internal_error");
    pub const GSI_TRANSIENT: ErrorDef = ErrorDef::new(Plan, 4360, "plan.gsi_transient");
    pub const CBO: ErrorDef = ErrorDef::new(Plan, 4600, "optimizer.cbo_error");
    pub const INDEX_STAT: ErrorDef = ErrorDef::new(Plan, 4610, "optimizer.index_stat_error");
    pub const GENERIC_WARNING: ErrorDef = ErrorDef::new(Plan, 4999, "plan.generic_warning");
}

/// Execution errors (5000-5999)
pub mod execution {
    use super::{ErrorDef, Namespace::Execution};

    pub const INTERNAL: ErrorDef = ErrorDef::new(Execution, 5000, "execution.internal_error");
    pub const PANIC: ErrorDef = ErrorDef::new(Execution, 5001, "execution.panic");
    pub const PARAMETER: ErrorDef = ErrorDef::new(Execution, 5003, "execution.parameter_error");
    pub const STATEMENT_STOPPED: ErrorDef =
        ErrorDef::new(Execution, 5008, "execution.statement_stopped");
    pub const EVALUATION: ErrorDef = ErrorDef::new(Execution, 5010, "execution.evaluation_error");
    pub const GROUP_UPDATE: ErrorDef =
        ErrorDef::new(Execution, 5020, "execution.group_update_error");
    pub const DATE_WARNING: ErrorDef = ErrorDef::new(Execution, 5021, "execution.date_warning");
    pub const INVALID_VALUE: ErrorDef =
        ErrorDef::new(Execution, 5030, "execution.invalid_value_error");
    pub const DIVIDE_BY_ZERO: ErrorDef = ErrorDef::new(Execution, 5036, "execution.divide_by_zero");
    pub const DUPLICATE_FINAL_GROUP: ErrorDef =
        ErrorDef::new(Execution, 5040, "execution.duplicate_final_group");
    pub const INSERT_KEY: ErrorDef = ErrorDef::new(Execution, 5050, "execution.insert_key_error");
    pub const UPSERT_KEY: ErrorDef = ErrorDef::new(Execution, 5072, "execution.upsert_key_error");
    pub const MISSING_DELETE_ALIAS: ErrorDef =
        ErrorDef::new(Execution, 5080, "execution.missing_delete_alias");
    pub const UPDATE_MISSING_CLONE: ErrorDef =
        ErrorDef::new(Execution, 5120, "execution.update_missing_clone");
    pub const MEMORY_QUOTA_EXCEEDED: ErrorDef =
        ErrorDef::new(Execution, 5500, "execution.memory_quota_exceeded");
}

/// Scheduler and rewrite errors (6000-6999)
pub mod scheduler {
    use super::{ErrorDef, Namespace::Scheduler};

    pub const SCHEDULER: ErrorDef = ErrorDef::new(Scheduler, 6001, "scheduler.error");
    pub const DUPLICATE_TASK: ErrorDef = ErrorDef::new(Scheduler, 6002, "scheduler.duplicate_task");
    pub const TASK_RUNNING: ErrorDef = ErrorDef::new(Scheduler, 6003, "scheduler.task_running");
    pub const TASK_NOT_FOUND: ErrorDef = ErrorDef::new(Scheduler, 6004, "scheduler.task_not_found");
    pub const REWRITE: ErrorDef = ErrorDef::new(Scheduler, 6500, "rewrite.error");
}

/// Schema inference errors (7000-7999)
pub mod inference {
    use super::{ErrorDef, Namespace::Inference};

    pub const INVALID_OPTION: ErrorDef = ErrorDef::new(Inference, 7000, "infer.invalid_option");
    pub const OPTION_NOT_NUMERIC: ErrorDef =
        ErrorDef::new(Inference, 7001, "infer.option.not_numeric");
    pub const NO_KEYSPACE_DOCUMENTS: ErrorDef =
        ErrorDef::new(Inference, 7003, "infer.keyspace.no_documents");
    pub const NO_SUITABLE_PRIMARY_INDEX: ErrorDef =
        ErrorDef::new(Inference, 7010, "infer.keyspace.no_primary");
    pub const NO_SUITABLE_SECONDARY_INDEX: ErrorDef =
        ErrorDef::new(Inference, 7011, "infer.keyspace.no_secondary");
    pub const TIMEOUT: ErrorDef = ErrorDef::new(Inference, 7012, "infer.timeout");
    pub const SIZE_LIMIT: ErrorDef = ErrorDef::new(Inference, 7013, "infer.size_limit");
    pub const NO_DOCUMENTS: ErrorDef = ErrorDef::new(Inference, 7014, "infer.no_documents");
    pub const CONNECT: ErrorDef = ErrorDef::new(Inference, 7015, "infer.connect.failed");
    pub const INDEX_WARNING: ErrorDef = ErrorDef::new(Inference, 7018, "infer.index_warning");
}

/// Datastore, authorization and function errors (10000-13999)
pub mod datastore {
    use super::{ErrorDef, Namespace::Datastore};

    pub const AUTHORIZATION: ErrorDef =
        ErrorDef::new(Datastore, 10000, "datastore.couchbase.authorization_error");
    pub const FUNCTION_MISSING: ErrorDef =
        ErrorDef::new(Datastore, 10101, "function.missing.error");
    pub const FUNCTION_DUPLICATE: ErrorDef =
        ErrorDef::new(Datastore, 10102, "function.duplicate.error");
    pub const FUNCTION_EXECUTION: ErrorDef =
        ErrorDef::new(Datastore, 10109, "function.execution.error");
    pub const SYSTEM_GENERIC: ErrorDef =
        ErrorDef::new(Datastore, 11000, "datastore.system.generic_error");
    pub const SYSTEM_KEYSPACE_NOT_FOUND: ErrorDef =
        ErrorDef::new(Datastore, 11002, "datastore.system.keyspace_not_found");
    pub const CONNECTION: ErrorDef =
        ErrorDef::new(Datastore, 12000, "datastore.couchbase.connection_error");
    pub const NAMESPACE_NOT_FOUND: ErrorDef =
        ErrorDef::new(Datastore, 12002, "datastore.couchbase.namespace_not_found");
    pub const KEYSPACE_NOT_FOUND: ErrorDef =
        ErrorDef::new(Datastore, 12003, "datastore.couchbase.keyspace_not_found");
    pub const BULK_GET: ErrorDef =
        ErrorDef::new(Datastore, 12008, "datastore.couchbase.bulk_get_error");
    pub const DML: ErrorDef = ErrorDef::new(Datastore, 12009, "datastore.couchbase.dml_error");
    pub const INDEX_SCAN_TIMEOUT: ErrorDef =
        ErrorDef::new(Datastore, 12015, "datastore.couchbase.index_scan_timeout");
    pub const INDEX_NOT_FOUND: ErrorDef =
        ErrorDef::new(Datastore, 12016, "datastore.couchbase.index_not_found");
    pub const WITH_INVALID_OPTION: ErrorDef =
        ErrorDef::new(Datastore, 12038, "datastore.with.invalid_option");
    pub const WITH_INVALID_VALUE: ErrorDef =
        ErrorDef::new(Datastore, 12039, "datastore.with.invalid_value");
    pub const INSUFFICIENT_CREDENTIALS: ErrorDef =
        ErrorDef::new(Datastore, 13014, "datastore.insufficient_credentials");
}

/// Sequential scan errors (16000-16999)
pub mod seqscan {
    use super::{ErrorDef, Namespace::SequentialScan};

    pub const INDEX_NOT_FOUND: ErrorDef =
        ErrorDef::new(SequentialScan, 16050, "datastore.seqscan.index_not_found");
    pub const NOT_SUPPORTED: ErrorDef =
        ErrorDef::new(SequentialScan, 16051, "datastore.seqscan.not_supported");
    pub const CONTINUE: ErrorDef =
        ErrorDef::new(SequentialScan, 16054, "datastore.seqscan.continue");
    pub const CREATE: ErrorDef = ErrorDef::new(SequentialScan, 16055, "datastore.seqscan.create");
    pub const TIMEOUT: ErrorDef = ErrorDef::new(SequentialScan, 16057, "datastore.seqscan.timeout");
    pub const FAILED: ErrorDef = ErrorDef::new(SequentialScan, 16062, "datastore.seqscan.failed");
}

/// Transaction errors (17000-17099)
pub mod transaction {
    use super::{ErrorDef, Namespace::Transaction};

    pub const DATASTORE_NOT_SUPPORTED: ErrorDef =
        ErrorDef::new(Transaction, 17001, "transaction.datastore.not_supported");
    pub const STATEMENT_NOT_SUPPORTED: ErrorDef =
        ErrorDef::new(Transaction, 17002, "transaction.statement.not_supported");
    pub const FUNCTION_NOT_SUPPORTED: ErrorDef =
        ErrorDef::new(Transaction, 17003, "transaction.function.not_supported");
    pub const CONTEXT: ErrorDef =
        ErrorDef::new(Transaction, 17004, "transaction.statement.txcontext");
    pub const OUT_OF_ORDER: ErrorDef =
        ErrorDef::new(Transaction, 17005, "transaction.statement.out_of_order");
    pub const START: ErrorDef = ErrorDef::new(Transaction, 17006, "transaction.statement.start");
    pub const COMMIT: ErrorDef = ErrorDef::new(Transaction, 17007, "transaction.statement.commit");
    pub const ROLLBACK: ErrorDef =
        ErrorDef::new(Transaction, 17008, "transaction.statement.rollback");
    pub const EXPIRED: ErrorDef = ErrorDef::new(Transaction, 17010, "transaction.expired");
    pub const RELEASED: ErrorDef = ErrorDef::new(Transaction, 17011, "transaction.released");
    pub const DUPLICATE_KEY: ErrorDef =
        ErrorDef::new(Transaction, 17012, "transaction.statement.duplicatekey");
    pub const QUEUE_FULL: ErrorDef = ErrorDef::new(Transaction, 17022, "transaction.queue.full");
    pub const MEMORY_ALLOCATION: ErrorDef =
        ErrorDef::new(Transaction, 17098, "transaction.nomemory");
    pub const TRANSACTION: ErrorDef = ErrorDef::new(Transaction, 17099, "transaction.error");
}

/// Data dictionary errors (18000-18999)
pub mod dictionary {
    use super::{ErrorDef, Namespace::Dictionary};

    pub const INTERNAL: ErrorDef = ErrorDef::new(Dictionary, 18010, "dictionary.internal");
    pub const SYSTEM_COLLECTION: ErrorDef =
        ErrorDef::new(Dictionary, 18040, "dictionary.system_collection");
    pub const ENCODING: ErrorDef = ErrorDef::new(Dictionary, 18050, "dictionary.encoding");
    pub const KEYSPACE_MISMATCH: ErrorDef =
        ErrorDef::new(Dictionary, 18060, "dictionary.keyspace_mismatch");
}

/// Virtual keyspace errors (19000-19099)
pub mod virtual_keyspace {
    use super::{ErrorDef, Namespace::VirtualKeyspace};

    pub const NOT_SUPPORTED: ErrorDef =
        ErrorDef::new(VirtualKeyspace, 19000, "datastore.virtual.keyspace_not_supported");
    pub const NOT_IMPLEMENTED: ErrorDef =
        ErrorDef::new(VirtualKeyspace, 19001, "datastore.virtual.keyspace_not_implemented");
    pub const INDEX_NOT_FOUND: ErrorDef =
        ErrorDef::new(VirtualKeyspace, 19003, "datastore.virtual.index_not_found");
    pub const SCOPE_NOT_FOUND: ErrorDef =
        ErrorDef::new(VirtualKeyspace, 19007, "datastore.virtual.scope_not_found");
    pub const KEYSPACE_NOT_FOUND: ErrorDef =
        ErrorDef::new(VirtualKeyspace, 19011, "datastore.virtual.keyspace_not_found");
}

/// Sequence errors (19100-19199)
pub mod sequence {
    use super::{ErrorDef, Namespace::Sequence};

    pub const NOT_ENABLED: ErrorDef =
        ErrorDef::new(Sequence, 19100, "datastore.sequence.not_enabled");
    pub const CREATE: ErrorDef = ErrorDef::new(Sequence, 19101, "datastore.sequence.create");
    pub const ALTER: ErrorDef = ErrorDef::new(Sequence, 19102, "datastore.sequence.alter");
    pub const DROP: ErrorDef = ErrorDef::new(Sequence, 19103, "datastore.sequence.drop");
    pub const INVALID_RANGE: ErrorDef = ErrorDef::new(Sequence, 19104, "datastore.sequence.range");
    pub const INVALID_CACHE: ErrorDef = ErrorDef::new(Sequence, 19105, "datastore.sequence.cache");
    pub const NOT_FOUND: ErrorDef = ErrorDef::new(Sequence, 19106, "datastore.sequence.not_found");
    pub const GENERIC: ErrorDef = ErrorDef::new(Sequence, 19107, "datastore.sequence.error");
    pub const ALREADY_EXISTS: ErrorDef =
        ErrorDef::new(Sequence, 19108, "datastore.sequence.already_exists");
    pub const METAKV: ErrorDef = ErrorDef::new(Sequence, 19109, "datastore.sequence.metakv");
    pub const INVALID_DATA: ErrorDef =
        ErrorDef::new(Sequence, 19110, "datastore.sequence.invalid_data");
    pub const EXHAUSTED: ErrorDef = ErrorDef::new(Sequence, 19111, "datastore.sequence.exhausted");
    pub const CYCLE: ErrorDef = ErrorDef::new(Sequence, 19112, "datastore.sequence.cycle");
    pub const INVALID_NAME: ErrorDef =
        ErrorDef::new(Sequence, 19113, "datastore.sequence.invalid_name");
    pub const READ_ONLY_REQUEST: ErrorDef =
        ErrorDef::new(Sequence, 19114, "datastore.sequence.read_only");
    pub const CACHE_SIZE_WARNING: ErrorDef =
        ErrorDef::new(Sequence, 19115, "datastore.sequence.cache_size");
    pub const NAME_PARTS: ErrorDef =
        ErrorDef::new(Sequence, 19116, "datastore.sequence.name_parts");
    pub const DROP_ALL: ErrorDef = ErrorDef::new(Sequence, 19117, "datastore.sequence.drop_all");
    pub const NO_PREV_VALUE_WARNING: ErrorDef =
        ErrorDef::new(Sequence, 19118, "datastore.sequence.no_prev_value");
}
