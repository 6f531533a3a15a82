use container_suseconnect::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Mock HostEnvironment recording every change it was asked for
///
/// Clones share their records, so a test can keep one handle and move the
/// other into a use case.
#[derive(Clone, Default)]
pub struct MockHostEnvironment {
    certificates: Rc<RefCell<Vec<String>>>,
    hosts: Rc<RefCell<Vec<(String, String)>>>,
    should_fail: bool,
}

impl MockHostEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn certificates(&self) -> Vec<String> {
        self.certificates.borrow().clone()
    }

    pub fn hosts(&self) -> Vec<(String, String)> {
        self.hosts.borrow().clone()
    }
}

impl HostEnvironment for MockHostEnvironment {
    fn install_ca_certificate(&self, contents: &str) -> Result<()> {
        self.certificates.borrow_mut().push(contents.to_string());
        if self.should_fail {
            anyhow::bail!("Mock CA installation failure");
        }
        Ok(())
    }

    fn update_hosts_entry(&self, hostname: &str, ip: &str) -> Result<()> {
        self.hosts
            .borrow_mut()
            .push((hostname.to_string(), ip.to_string()));
        if self.should_fail {
            anyhow::bail!("Mock hosts file failure");
        }
        Ok(())
    }
}
