//! Static schema of the SBC configuration database.
//!
//! The groups are applied in the order they appear in [`SCHEMA_GROUPS`]. A group is one or more
//! `;`-separated statements executed as a single batch. The `version` table must be created
//! before any group that seeds a row into it.

/// A named batch of DDL/seed statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaGroup {
    pub name: &'static str,
    pub sql: &'static str,
}

impl SchemaGroup {
    pub const fn new(name: &'static str, sql: &'static str) -> Self {
        Self { name, sql }
    }
}

/* ------------------------------ SBC ------------------------------ */

const SBC_INTERFACE_LIST: &str = r#"
    CREATE TABLE IF NOT EXISTS sbc_interface_list (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        if_name VARCHAR(50) NOT NULL,
        mac VARCHAR(40) NOT NULL,
        created DATE NULL,
        username VARCHAR(40) NOT NULL
    );
"#;

const SBC_IP_ADDRESS: &str = r#"
    CREATE TABLE IF NOT EXISTS sbc_ip_address (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        grp INTEGER DEFAULT 1 NOT NULL,
        ip_addr VARCHAR(50) NOT NULL,
        mask INTEGER DEFAULT 32 NOT NULL,
        tag VARCHAR(64),
        created DATE NULL,
        username VARCHAR(40) NOT NULL
    );
"#;

const SBC_TRUNK: &str = r#"
    CREATE TABLE IF NOT EXISTS sbc_trunk (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name VARCHAR(50) NOT NULL,
        grp INTEGER DEFAULT 1 NOT NULL,
        grp_sig_untrust_dst VARCHAR(100) NOT NULL,
        grp_sig_untrust_src VARCHAR(100) NOT NULL,
        grp_sig_trust_dst VARCHAR(100) NOT NULL,
        grp_sig_trust_src VARCHAR(100) NOT NULL,
        grp_media_trust VARCHAR(100) NOT NULL,
        grp_media_untrust VARCHAR(100) NOT NULL,
        description VARCHAR(200) NOT NULL,
        topohide SMALLINT NOT NULL,
        type SMALLINT NOT NULL,
        active SMALLINT NOT NULL,
        created DATE NULL,
        username VARCHAR(40) NOT NULL
    );
"#;

const SBC_SIGNALING: &str = r#"
    CREATE TABLE IF NOT EXISTS sbc_signaling (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        ip_addr VARCHAR(50) NOT NULL,
        port INTEGER DEFAULT 5060 NOT NULL,
        proto SMALLINT NOT NULL,
        description VARCHAR(100) NOT NULL,
        created DATE NULL,
        username VARCHAR(40) NOT NULL
    );
"#;

const SBC_MEDIA: &str = r#"
    CREATE TABLE IF NOT EXISTS sbc_media (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        ip_addr VARCHAR(50) NOT NULL,
        description VARCHAR(100) NOT NULL,
        created DATE NULL,
        username VARCHAR(40) NOT NULL
    );
"#;

/* ---------------------- SIP proxy (kamailio) ---------------------- */

const VERSION: &str = r#"
    CREATE TABLE IF NOT EXISTS version (
        table_name VARCHAR(32) NOT NULL,
        table_version INTEGER DEFAULT 0 NOT NULL,
        CONSTRAINT version_table_name_idx UNIQUE (table_name)
    );

    INSERT INTO version (table_name, table_version) values ('version','1');
"#;

const DISPATCHER: &str = r#"
    CREATE TABLE IF NOT EXISTS dispatcher (
        id INTEGER PRIMARY KEY NOT NULL,
        setid INTEGER DEFAULT 0 NOT NULL,
        destination VARCHAR(192) DEFAULT '' NOT NULL,
        flags INTEGER DEFAULT 0 NOT NULL,
        priority INTEGER DEFAULT 0 NOT NULL,
        attrs VARCHAR(128) DEFAULT '' NOT NULL,
        description VARCHAR(64) DEFAULT '' NOT NULL
    );

    INSERT INTO version (table_name, table_version) values ('dispatcher','4');
"#;

const TRUSTED: &str = r#"
    CREATE TABLE IF NOT EXISTS trusted (
        id INTEGER PRIMARY KEY NOT NULL,
        src_ip VARCHAR(50) NOT NULL,
        proto VARCHAR(4) NOT NULL,
        from_pattern VARCHAR(64) DEFAULT NULL,
        ruri_pattern VARCHAR(64) DEFAULT NULL,
        tag VARCHAR(64),
        priority INTEGER DEFAULT 0 NOT NULL
    );

    CREATE INDEX trusted_peer_idx ON trusted (src_ip);

    INSERT INTO version (table_name, table_version) values ('trusted','6');
"#;

const ADDRESS: &str = r#"
    CREATE TABLE IF NOT EXISTS address (
        id INTEGER PRIMARY KEY NOT NULL,
        grp INTEGER DEFAULT 1 NOT NULL,
        ip_addr VARCHAR(50) NOT NULL,
        mask INTEGER DEFAULT 32 NOT NULL,
        port SMALLINT DEFAULT 0 NOT NULL,
        tag VARCHAR(64)
    );

    INSERT INTO version (table_name, table_version) values ('address','6');
"#;

const PL_PIPES: &str = r#"
    CREATE TABLE IF NOT EXISTS pl_pipes (
        id INTEGER PRIMARY KEY NOT NULL,
        pipeid VARCHAR(64) DEFAULT '' NOT NULL,
        algorithm VARCHAR(32) DEFAULT '' NOT NULL,
        plimit INTEGER DEFAULT 0 NOT NULL
    );

    INSERT INTO version (table_name, table_version) values ('pl_pipes','1');
"#;

const DOMAIN: &str = r#"
    CREATE TABLE IF NOT EXISTS domain (
        id INTEGER PRIMARY KEY NOT NULL,
        domain VARCHAR(64) NOT NULL,
        did VARCHAR(64) DEFAULT NULL,
        last_modified TIMESTAMP WITHOUT TIME ZONE DEFAULT '2000-01-01 00:00:01' NOT NULL,
        CONSTRAINT domain_domain_idx UNIQUE (domain)
    );

    INSERT INTO version (table_name, table_version) values ('domain','2');
"#;

const DOMAIN_ATTRS: &str = r#"
    CREATE TABLE IF NOT EXISTS domain_attrs (
        id INTEGER PRIMARY KEY NOT NULL,
        did VARCHAR(64) NOT NULL,
        name VARCHAR(32) NOT NULL,
        type INTEGER NOT NULL,
        value VARCHAR(255) NOT NULL,
        last_modified TIMESTAMP WITHOUT TIME ZONE DEFAULT '2000-01-01 00:00:01' NOT NULL
    );

    CREATE INDEX domain_attrs_domain_attrs_idx ON domain_attrs (did, name);
    INSERT INTO version (table_name, table_version) values ('domain_attrs','1');
"#;

/// Every statement group, in application order.
pub const SCHEMA_GROUPS: &[SchemaGroup] = &[
    SchemaGroup::new("sbc_interface_list", SBC_INTERFACE_LIST),
    SchemaGroup::new("sbc_ip_address", SBC_IP_ADDRESS),
    SchemaGroup::new("sbc_trunk", SBC_TRUNK),
    SchemaGroup::new("sbc_signaling", SBC_SIGNALING),
    SchemaGroup::new("sbc_media", SBC_MEDIA),
    SchemaGroup::new("version", VERSION),
    SchemaGroup::new("dispatcher", DISPATCHER),
    SchemaGroup::new("trusted", TRUSTED),
    SchemaGroup::new("address", ADDRESS),
    SchemaGroup::new("pl_pipes", PL_PIPES),
    SchemaGroup::new("domain", DOMAIN),
    SchemaGroup::new("domain_attrs", DOMAIN_ATTRS),
];

/// Seed rows written into `version` on first initialization.
pub const VERSION_SEEDS: &[(&str, i64)] = &[
    ("version", 1),
    ("dispatcher", 4),
    ("trusted", 6),
    ("address", 6),
    ("pl_pipes", 1),
    ("domain", 2),
    ("domain_attrs", 1),
];

/// Names of the tables created by [`SCHEMA_GROUPS`].
pub fn table_names() -> impl Iterator<Item = &'static str> {
    SCHEMA_GROUPS.iter().map(|g| g.name)
}
