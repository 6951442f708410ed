//! The persisted account record and its fixed on-disk contract.
//!
//! Element names, option names, and literal values below are read back by
//! the FTP server and must match its expectations exactly: booleans are
//! `"0"`/`"1"` strings, speed limits default to type 0 with limit 10, and
//! the single permission entry marks the home directory root.

use xmltree::{Element, XMLNode};

/// One FTP user's configuration entry, ready to be appended to the
/// document's `<Users>` collection.
pub struct AccountRecord {
    name: String,
    password_hash: String,
    salt: String,
    home_dir: String,
}

impl AccountRecord {
    /// Create a record with the default permission and limit set, bound to
    /// `home_dir`.
    ///
    /// The account name is normalized to uppercase, matching the
    /// case-normalization applied by the existence check.
    pub fn new(
        name: impl Into<String>,
        password_hash: impl Into<String>,
        salt: impl Into<String>,
        home_dir: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into().to_uppercase(),
            password_hash: password_hash.into(),
            salt: salt.into(),
            home_dir: home_dir.into(),
        }
    }

    /// The uppercase account name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Build the `<User>` element for this record.
    pub fn to_element(&self) -> Element {
        let mut user = element_with_attrs("User", &[("Name", &self.name)]);

        user.children.extend([
            option("Pass", &self.password_hash),
            option("Salt", &self.salt),
            option("Group", ""),
            option("Bypass server userlimit", "0"),
            option("User Limit", "0"),
            option("IP Limit", "0"),
            option("Enabled", "1"),
            option("Comments", ""),
            option("ForceSsl", "0"),
        ]);

        let mut ip_filter = Element::new("IpFilter");
        ip_filter.children.push(node(Element::new("Disallowed")));
        ip_filter.children.push(node(Element::new("Allowed")));
        user.children.push(node(ip_filter));

        user.children.push(node(self.permissions_element()));
        user.children.push(node(speed_limits_element()));

        user
    }

    /// One `<Permission>` entry for the home directory: file read, write,
    /// delete, and append allowed; directory create and delete disallowed;
    /// listing and subdirectory traversal allowed; marked as the home root;
    /// no auto-create.
    fn permissions_element(&self) -> Element {
        let mut permission = element_with_attrs("Permission", &[("Dir", &self.home_dir)]);
        permission.children.extend([
            option("FileRead", "1"),
            option("FileWrite", "1"),
            option("FileDelete", "1"),
            option("FileAppend", "1"),
            option("DirCreate", "0"),
            option("DirDelete", "0"),
            option("DirList", "1"),
            option("DirSubdirs", "1"),
            option("IsHome", "1"),
            option("AutoCreate", "0"),
        ]);

        let mut permissions = Element::new("Permissions");
        permissions.children.push(node(permission));
        permissions
    }
}

/// Default download/upload caps: type 0 ("unlimited unless set"), limit 10,
/// no server-limit bypass, empty override lists.
fn speed_limits_element() -> Element {
    let mut speed_limits = element_with_attrs(
        "SpeedLimits",
        &[
            ("DlType", "0"),
            ("DlLimit", "10"),
            ("ServerDlLimitBypass", "0"),
            ("UlType", "0"),
            ("UlLimit", "10"),
            ("ServerUlLimitBypass", "0"),
        ],
    );
    speed_limits.children.push(node(Element::new("Download")));
    speed_limits.children.push(node(Element::new("Upload")));
    speed_limits
}

/// An `<Option Name="...">value</Option>` element. Empty values serialize
/// as an empty element, matching the consuming server's own output.
fn option(name: &str, value: &str) -> XMLNode {
    let mut el = element_with_attrs("Option", &[("Name", name)]);
    if !value.is_empty() {
        el.children.push(XMLNode::Text(value.to_string()));
    }
    node(el)
}

fn element_with_attrs(name: &str, attrs: &[(&str, &str)]) -> Element {
    let mut el = Element::new(name);
    for (key, value) in attrs {
        el.attributes.insert((*key).to_string(), (*value).to_string());
    }
    el
}

fn node(el: Element) -> XMLNode {
    XMLNode::Element(el)
}
