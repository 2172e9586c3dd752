//! The ordered collection of all recognized configuration fields.
//!
//! The schema is compiled in and never extended at runtime. Insertion order
//! defines the layout of the on-disk document, with dotted key prefixes
//! mapping to nested tables ([dns], [dns.blocking], [database], ...).

use super::enums::{
    BlockingMode, BusyMode, ListeningMode, PtrMode, RefreshHostnames, WebTheme,
};
use super::field::{ConfigField, FieldFlags};
use super::value::ConfigValue;
use std::net::{Ipv4Addr, Ipv6Addr};

/// The full, ordered field table. Exactly one live instance exists
/// process-wide; a second, staged deep copy exists only while an update
/// transaction is in flight.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigRegistry {
    fields: Vec<ConfigField>,
}

impl Default for ConfigRegistry {
    fn default() -> Self {
        Self {
            fields: compiled_schema(),
        }
    }
}

impl ConfigRegistry {
    /// All fields in stable (document) order.
    pub fn iter(&self) -> impl Iterator<Item = &ConfigField> {
        self.fields.iter()
    }

    /// Exact, case-sensitive dotted-key lookup.
    pub fn get(&self, key: &str) -> Option<&ConfigField> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut ConfigField> {
        self.fields.iter_mut().find(|f| f.key == key)
    }

    /// Mutable walk in document order, used by the document reader to
    /// overlay loaded values onto the defaults.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ConfigField> {
        self.fields.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

fn compiled_schema() -> Vec<ConfigField> {
    use ConfigValue as V;
    use FieldFlags as F;

    vec![
        // [dns]
        ConfigField::new(
            "dns.upstreams",
            V::StringArray(vec!["9.9.9.9".to_string(), "149.112.112.112".to_string()]),
            F::RESTART_RESOLVER,
            "Upstream DNS servers the dependent resolver forwards to",
        ),
        ConfigField::new(
            "dns.CNAMEdeepInspect",
            V::Bool(true),
            F::NONE,
            "Walk CNAME paths to detect blocked targets deep in the chain",
        ),
        ConfigField::new(
            "dns.blockESNI",
            V::Bool(true),
            F::NONE,
            "Block _esni. subdomains of blocked domains",
        ),
        ConfigField::new(
            "dns.EDNS0ECS",
            V::Bool(true),
            F::NONE,
            "Analyze EDNS0 client subnet information to identify clients behind NAT",
        ),
        ConfigField::new(
            "dns.ignoreLocalhost",
            V::Bool(false),
            F::NONE,
            "Hide queries made by localhost",
        ),
        ConfigField::new(
            "dns.bogusPriv",
            V::Bool(true),
            F::RESTART_RESOLVER,
            "Never forward reverse lookups for private IP ranges upstream",
        ),
        ConfigField::new(
            "dns.domainNeeded",
            V::Bool(true),
            F::RESTART_RESOLVER,
            "Never forward queries for plain names without dots or domain parts",
        ),
        ConfigField::new(
            "dns.dnssec",
            V::Bool(false),
            F::RESTART_RESOLVER,
            "Validate DNS replies using DNSSEC",
        ),
        ConfigField::new(
            "dns.interface",
            V::String(String::new()),
            F::RESTART_RESOLVER,
            "Interface to use for DNS (see also dns.listeningMode)",
        ),
        ConfigField::new(
            "dns.port",
            V::Uint16(53),
            F::RESTART_RESOLVER,
            "Port used by the DNS server",
        ),
        ConfigField::new(
            "dns.queryLogging",
            V::Bool(true),
            F::NONE,
            "Log DNS queries and replies to the query database",
        ),
        ConfigField::new(
            "dns.piholePTR",
            V::PtrMode(PtrMode::PiHole),
            F::NONE,
            "Reply to PTR requests for the server's own address",
        ),
        ConfigField::new(
            "dns.replyWhenBusy",
            V::BusyMode(BusyMode::Allow),
            F::NONE,
            "How to reply to clients that are rate-limited",
        ),
        ConfigField::new(
            "dns.blockTTL",
            V::Uint(2),
            F::NONE,
            "TTL [seconds] of replies for blocked queries",
        ),
        ConfigField::new(
            "dns.hosts",
            V::StringArray(vec![]),
            F::NONE,
            "Static host overrides, one \"IP NAME\" entry per element",
        ),
        // [dns.blocking]
        ConfigField::new(
            "dns.blocking.active",
            V::Bool(true),
            F::NONE,
            "Is domain blocking enabled?",
        ),
        ConfigField::new(
            "dns.blocking.mode",
            V::BlockingMode(BlockingMode::Null),
            F::NONE,
            "How to reply to blocked queries",
        ),
        ConfigField::new(
            "dns.listeningMode",
            V::ListeningMode(ListeningMode::Local),
            F::RESTART_RESOLVER,
            "Which interfaces the dependent resolver listens on",
        ),
        // [dns.rateLimit]
        ConfigField::new(
            "dns.rateLimit.count",
            V::Uint(1000),
            F::NONE,
            "How many queries are permitted per client...",
        ),
        ConfigField::new(
            "dns.rateLimit.interval",
            V::Uint(60),
            F::NONE,
            "...in this many seconds before rate-limiting kicks in (0 = disabled)",
        ),
        // [dns.reply.blocking]
        ConfigField::new(
            "dns.reply.blocking.IPv4",
            V::Ipv4(Ipv4Addr::UNSPECIFIED),
            F::NONE,
            "IPv4 address used in IP blocking mode (0.0.0.0 = automatic)",
        ),
        ConfigField::new(
            "dns.reply.blocking.IPv6",
            V::Ipv6(Ipv6Addr::UNSPECIFIED),
            F::NONE,
            "IPv6 address used in IP blocking mode (:: = automatic)",
        ),
        // [resolver]
        ConfigField::new(
            "resolver.resolveIPv4",
            V::Bool(true),
            F::NONE,
            "Resolve IPv4 client addresses to hostnames",
        ),
        ConfigField::new(
            "resolver.resolveIPv6",
            V::Bool(true),
            F::NONE,
            "Resolve IPv6 client addresses to hostnames",
        ),
        ConfigField::new(
            "resolver.networkNames",
            V::Bool(true),
            F::NONE,
            "Try to obtain client names from the network table",
        ),
        ConfigField::new(
            "resolver.refreshNames",
            V::RefreshHostnames(RefreshHostnames::Ipv4Only),
            F::NONE,
            "Which client hostnames the hourly PTR refresh re-resolves",
        ),
        // [database]
        ConfigField::new(
            "database.DBimport",
            V::Bool(true),
            F::NONE,
            "Import recent query history from the database on startup",
        ),
        ConfigField::new(
            "database.maxDBdays",
            V::Int(91),
            F::NONE,
            "How long to keep queries in the database [days] (-1 = forever)",
        ),
        ConfigField::new(
            "database.DBinterval",
            V::Uint(60),
            F::NONE,
            "How often queries are flushed to the database [seconds]",
        ),
        ConfigField::new(
            "database.maxHistory",
            V::Uint(86400),
            F::NONE,
            "How much history to import from the database [seconds]",
        ),
        ConfigField::new(
            "database.busyTimeout",
            V::Ulong(2500),
            F::NONE,
            "SQLite busy timeout [milliseconds]",
        ),
        // [database.network]
        ConfigField::new(
            "database.network.parseARP",
            V::Bool(true),
            F::NONE,
            "Analyze the local ARP cache to fill the network table",
        ),
        ConfigField::new(
            "database.network.expire",
            V::Uint(91),
            F::NONE,
            "Remove stale addresses from the network table after this many days",
        ),
        // [webserver]
        ConfigField::new(
            "webserver.domain",
            V::String("pi.hole".to_string()),
            F::NONE,
            "Domain the web interface is served on",
        ),
        ConfigField::new(
            "webserver.acl",
            V::String(String::new()),
            F::NONE,
            "Webserver access control list (empty = allow all)",
        ),
        ConfigField::new(
            "webserver.port",
            V::String("80o,443os".to_string()),
            F::NONE,
            "Ports used by the webserver, list of [ip_address:]port[o|s]",
        ),
        // [webserver.session]
        ConfigField::new(
            "webserver.session.timeout",
            V::Uint(1800),
            F::NONE,
            "How long a session stays valid after the last activity [seconds]",
        ),
        // [webserver.interface]
        ConfigField::new(
            "webserver.interface.theme",
            V::WebTheme(WebTheme::DefaultAuto),
            F::NONE,
            "Web interface theme",
        ),
        // [webserver.api]
        ConfigField::new(
            "webserver.api.password",
            V::Password(String::new()),
            F::SECRET,
            "API password, stored as a one-way hash (empty = no password)",
        ),
        ConfigField::new(
            "webserver.api.prettyJSON",
            V::Bool(false),
            F::NONE,
            "Prettify API JSON output with extra spaces and line breaks",
        ),
        // [files]
        ConfigField::new(
            "files.log",
            V::String("/var/log/umbra-dns/umbra.log".to_string()),
            F::NONE,
            "Location of the log file",
        ),
        ConfigField::new(
            "files.pid",
            V::String("/run/umbra-dns/umbra.pid".to_string()),
            F::NONE,
            "Location of the PID file",
        ),
        ConfigField::new(
            "files.database",
            V::String("/etc/umbra-dns/history.db".to_string()),
            F::NONE,
            "Location of the long-term query database",
        ),
        ConfigField::new(
            "files.gravity",
            V::String("/etc/umbra-dns/gravity.db".to_string()),
            F::NONE,
            "Location of the domain-list (gravity) database",
        ),
        ConfigField::new(
            "files.macvendor",
            V::String("/etc/umbra-dns/macvendor.db".to_string()),
            F::NONE,
            "Database with MAC address to vendor mappings for the network table",
        ),
        // [misc]
        ConfigField::new(
            "misc.privacyLevel",
            V::PrivacyLevel(0),
            F::NONE,
            "Privacy level: redaction of clients and domains in the query log (0-3)",
        ),
        ConfigField::new(
            "misc.nice",
            V::Int(-10),
            F::NONE,
            "Process niceness (-999 = do not change)",
        ),
        ConfigField::new(
            "misc.delayStartup",
            V::Uint(0),
            F::NONE,
            "Artificially delay startup by this many seconds (0 to 300)",
        ),
        // [misc.check]
        ConfigField::new(
            "misc.check.loadAverage",
            V::Double(0.0),
            F::NONE,
            "Warn when the 1-minute load average exceeds this value (0 = disabled)",
        ),
        ConfigField::new(
            "misc.check.shmem",
            V::Uint(90),
            F::NONE,
            "Warn when shared memory usage exceeds this percentage",
        ),
        ConfigField::new(
            "misc.check.disk",
            V::Uint(90),
            F::NONE,
            "Warn when disk usage of the database partition exceeds this percentage",
        ),
        // [debug]
        ConfigField::new(
            "debug.config",
            V::Bool(false),
            F::NONE,
            "Verbose logging of config file processing",
        ),
        ConfigField::new(
            "debug.database",
            V::Bool(false),
            F::NONE,
            "Verbose logging of database actions",
        ),
        ConfigField::new(
            "debug.queries",
            V::Bool(false),
            F::NONE,
            "Verbose logging of query processing",
        ),
        ConfigField::new(
            "debug.resolver",
            V::Bool(false),
            F::NONE,
            "Verbose logging of resolver interactions",
        ),
        ConfigField::new(
            "debug.api",
            V::Bool(false),
            F::NONE,
            "Verbose logging of API requests",
        ),
    ]
}
