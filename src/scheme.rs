//! The IANA scheme whitelist.
//!
//! Only URIs whose scheme appears in this table are extracted. Restricting
//! the scheme is what keeps `xyz://host` and `note:` out of the output,
//! even though both are syntactically well-formed generic URIs.
//!
//! # Ordering
//!
//! Lookup is an ordered choice: the first entry that matches wins and later
//! entries are never tried. Any scheme that is a proper prefix of another
//! must therefore come *after* it (`aaas` before `aaa`, `iris.beep` before
//! `iris`), or the longer scheme could never match.

/// Registered schemes in lookup order.
pub const IANA_SCHEMES: &[&str] = &[
    "aaas",
    "aaa",
    "about",
    "acap",
    "acct",
    "acr",
    "adiumxtra",
    "afp",
    "afs",
    "aim",
    "appdata",
    "apt",
    "attachment",
    "aw",
    "barion",
    "beshare",
    "bitcoin",
    "blob",
    "bolo",
    "callto",
    "cap",
    "chrome-extension",
    "chrome",
    "cid",
    "coaps",
    "coap",
    "com-eventbrite-attendee",
    "content",
    "crid",
    "cvs",
    "data",
    "dav",
    "dict",
    "dis",
    "dlna-playcontainer",
    "dlna-playsingle",
    "dns",
    "dntp",
    "dtn",
    "dvb",
    "ed2k",
    "example",
    "facetime",
    "fax",
    "feedready",
    "feed",
    "filesystem",
    "file",
    "finger",
    "fish",
    "ftp",
    "geo",
    "gg",
    "git",
    "gizmoproject",
    "gopher",
    "go",
    "gtalk",
    "h323",
    "ham",
    "hcp",
    "https",
    "http",
    "iax",
    "icap",
    "icon",
    "imap",
    "im",
    "info",
    "iotdisco",
    "ipn",
    "ipps",
    "ipp",
    "irc6",
    "ircs",
    "irc",
    "iris.beep",
    "iris.lwz",
    "iris.xpcs",
    "iris.xpc",
    "iris",
    "isostore",
    "itms",
    "jabber",
    "jar",
    "jms",
    "keyparc",
    "lastfm",
    "ldaps",
    "ldap",
    "magnet",
    "mailserver",
    "mailto",
    "maps",
    "market",
    "message",
    "mid",
    "mms",
    "modem",
    "ms-access",
    "ms-drive-to",
    "ms-excel",
    "ms-getoffice",
    "ms-help",
    "ms-infopath",
    "ms-media-stream-id",
    "ms-powerpoint",
    "ms-project",
    "ms-publisher",
    "ms-search-repair",
    "ms-secondary-screen-controller",
    "ms-secondary-screen-setup",
    "ms-settings-airplanemode",
    "ms-settings-bluetooth",
    "ms-settings-camera",
    "ms-settings-cellular",
    "ms-settings-cloudstorage",
    "ms-settings-emailandaccounts",
    "ms-settings-language",
    "ms-settings-location",
    "ms-settings-lock",
    "ms-settings-nfctransactions",
    "ms-settings-notifications",
    "ms-settings-power",
    "ms-settings-privacy",
    "ms-settings-proximity",
    "ms-settings-screenrotation",
    "ms-settings-wifi",
    "ms-settings-workplace",
    "ms-settings",
    "ms-spd",
    "ms-transit-to",
    "ms-visio",
    "ms-walk-to",
    "ms-word",
    "msnim",
    "msrps",
    "msrp",
    "mtqp",
    "mumble",
    "mupdate",
    "mvn",
    "news",
    "nfs",
    "nih",
    "ni",
    "nntp",
    "notes",
    "oid",
    "opaquelocktoken",
    "pack",
    "palm",
    "paparazzi",
    "pkcs11",
    "platform",
    "pop",
    "pres",
    "prospero",
    "proxy",
    "psyc",
    "query",
    "rediss",
    "redis",
    "reload",
    "resource",
    "res",
    "rmi",
    "rsync",
    "rtmfp",
    "rtmp",
    "rtsps",
    "rtspu",
    "rtsp",
    "secondlife",
    "service",
    "session",
    "sftp",
    "sgn",
    "shttp",
    "sieve",
    "sips",
    "sip",
    "skype",
    "smb",
    "sms",
    "smtp",
    "snews",
    "snmp",
    "soap.beeps",
    "soap.beep",
    "soldat",
    "spotify",
    "ssh",
    "steam",
    "stuns",
    "stun",
    "submit",
    "svn",
    "tag",
    "teamspeak",
    "teliaeid",
    "telnet",
    "tel",
    "tftp",
    "things",
    "thismessage",
    "tip",
    "tn3270",
    "turns",
    "turn",
    "tv",
    "udp",
    "unreal",
    "urn",
    "ut2004",
    "v-event",
    "vemmi",
    "ventrilo",
    "videotex",
    "view-source",
    "wais",
    "webcal",
    "wss",
    "ws",
    "wtai",
    "wyciwyg",
    "xcon-userid",
    "xcon",
    "xfire",
    "xmlrpc.beeps",
    "xmlrpc.beep",
    "xmpp",
    "xri",
    "ymsgr",
    "z39.50r",
    "z39.50s",
    "z39.50",
];

/// An ordered, case-insensitive set of URI schemes.
///
/// # Examples
///
/// ```
/// use grepurls::SchemeTable;
///
/// let table = SchemeTable::iana();
/// assert_eq!(table.lookup(b"HTTPS://example.com", 0), Some("https"));
/// assert_eq!(table.lookup(b"aaas://y", 0), Some("aaas"));
/// assert_eq!(table.lookup(b"xyz://host", 0), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemeTable {
    schemes: &'static [&'static str],
}

impl SchemeTable {
    /// Returns the table of IANA-registered schemes.
    #[must_use]
    pub const fn iana() -> Self {
        Self {
            schemes: IANA_SCHEMES,
        }
    }

    /// Creates a table over a custom list of lowercase schemes.
    ///
    /// The list is used in the given order; see
    /// [`first_ordering_violation`](Self::first_ordering_violation).
    #[must_use]
    pub const fn from_static(schemes: &'static [&'static str]) -> Self {
        Self { schemes }
    }

    /// Finds the scheme that matches `input` at offset `at`.
    ///
    /// Entries are tried in table order as case-insensitive literals and
    /// the first one that matches is returned. The matched scheme consumes
    /// exactly `scheme.len()` bytes.
    #[must_use]
    pub fn lookup(&self, input: &[u8], at: usize) -> Option<&'static str> {
        let rest = input.get(at..)?;
        self.schemes.iter().copied().find(|scheme| {
            rest.get(..scheme.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(scheme.as_bytes()))
        })
    }

    /// Returns true if `name` is exactly one of the schemes, ignoring case.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.schemes.iter().any(|s| s.eq_ignore_ascii_case(name))
    }

    /// Returns the first `(earlier, later)` pair where `earlier` is a proper
    /// prefix of `later`, which would make `later` unreachable.
    #[must_use]
    pub fn first_ordering_violation(&self) -> Option<(&'static str, &'static str)> {
        self.schemes.iter().enumerate().find_map(|(i, earlier)| {
            self.schemes[i + 1..]
                .iter()
                .find(|later| later.len() > earlier.len() && later.starts_with(earlier))
                .map(|later| (*earlier, *later))
        })
    }

    /// Returns the number of schemes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.schemes.len()
    }

    /// Returns true if the table is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    /// Returns the schemes in lookup order.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.schemes.iter().copied()
    }

    /// Returns the underlying slice in lookup order.
    #[must_use]
    pub const fn as_slice(&self) -> &'static [&'static str] {
        self.schemes
    }
}

impl Default for SchemeTable {
    fn default() -> Self {
        Self::iana()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iana_table_is_prefix_ordered() {
        assert_eq!(SchemeTable::iana().first_ordering_violation(), None);
    }

    #[test]
    fn detects_misordered_prefix() {
        let table = SchemeTable::from_static(&["ftp", "aaa", "aaas"]);
        assert_eq!(table.first_ordering_violation(), Some(("aaa", "aaas")));
    }

    #[test]
    fn iana_schemes_are_lowercase_ascii() {
        for scheme in SchemeTable::iana().iter() {
            assert!(!scheme.is_empty());
            assert!(
                scheme
                    .bytes()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b"+-.".contains(&b)),
                "unexpected character in {scheme}"
            );
        }
    }

    #[test]
    fn iana_schemes_start_with_a_letter() {
        assert!(
            SchemeTable::iana()
                .iter()
                .all(|scheme| scheme.as_bytes()[0].is_ascii_alphabetic())
        );
    }

    #[test]
    fn iana_schemes_are_unique() {
        let table = SchemeTable::iana();
        let mut seen = std::collections::HashSet::new();
        for scheme in table.iter() {
            assert!(seen.insert(scheme), "duplicate scheme {scheme}");
        }
        assert_eq!(seen.len(), table.len());
    }

    #[test]
    fn lookup_prefers_longer_registered_scheme() {
        let table = SchemeTable::iana();
        assert_eq!(table.lookup(b"https://a", 0), Some("https"));
        assert_eq!(table.lookup(b"http://a", 0), Some("http"));
        assert_eq!(table.lookup(b"iris.beep:x", 0), Some("iris.beep"));
        assert_eq!(table.lookup(b"z39.50r:x", 0), Some("z39.50r"));
        assert_eq!(table.lookup(b"ms-settings-wifi:", 0), Some("ms-settings-wifi"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let table = SchemeTable::iana();
        assert_eq!(table.lookup(b"MailTo:x", 0), Some("mailto"));
    }

    #[test]
    fn lookup_at_offset() {
        let table = SchemeTable::iana();
        assert_eq!(table.lookup(b"see:ftp://x", 4), Some("ftp"));
        assert_eq!(table.lookup(b"ftp", 3), None);
        assert_eq!(table.lookup(b"ftp", 10), None);
    }

    #[test]
    fn lookup_is_prefix_only() {
        // "http" matches as a prefix; whether ':' follows is the grammar's job.
        let table = SchemeTable::iana();
        assert_eq!(table.lookup(b"httpx", 0), Some("http"));
        assert_eq!(table.lookup(b"htt", 0), None);
    }

    #[test]
    fn contains_is_exact() {
        let table = SchemeTable::iana();
        assert!(table.contains("HTTP"));
        assert!(table.contains("view-source"));
        assert!(!table.contains("htt"));
        assert!(!table.contains("xyz"));
    }
}
