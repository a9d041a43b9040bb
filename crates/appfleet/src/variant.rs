//! The four appfleet binaries and what each of them may do

use crate::Invocation;

/// Built-in defaults of a binary, used when neither a flag, an
/// environment variable nor the config file provides a value
#[derive(Debug, Clone, Copy)]
pub struct Defaults {
    pub stack: &'static str,
    pub user: &'static str,
    pub fleet: &'static str,
    pub profile: &'static str,
    pub region: &'static str,
    pub validity_secs: u64,
    pub label: &'static str,
}

const FOUR_HOURS: u64 = 4 * 60 * 60;

const CLASSROOM_DEFAULTS: Defaults = Defaults {
    stack: "3dPrinting",
    user: "3dp",
    fleet: "3d_Printing",
    profile: "personal",
    region: appfleet_cloud_aws::DEFAULT_REGION,
    validity_secs: FOUR_HOURS,
    label: "Slicer",
};

#[derive(Debug, Clone, Copy)]
pub struct Variant {
    /// Binary name; also the key of its section in the config file
    pub name: &'static str,

    /// Whether the binary starts/stops the fleet or only mints URLs
    pub manages_fleet: bool,

    pub supports_roster: bool,
    pub supports_prewarm: bool,
    pub supports_count: bool,

    pub defaults: Defaults,
}

/// Classroom tool: one URL, or one per roster name; can stop the fleet
pub const CLASSROOM: Variant = Variant {
    name: "appfleet",
    manages_fleet: true,
    supports_roster: true,
    supports_prewarm: false,
    supports_count: false,
    defaults: CLASSROOM_DEFAULTS,
};

/// Raises desired capacity before starting, then mints `--count` URLs
pub const PREWARM: Variant = Variant {
    name: "appfleet-prewarm",
    manages_fleet: true,
    supports_roster: false,
    supports_prewarm: true,
    supports_count: true,
    defaults: Defaults {
        user: "workshop",
        ..CLASSROOM_DEFAULTS
    },
};

/// Batch minting from a roster or a count
pub const BATCH: Variant = Variant {
    name: "appfleet-batch",
    manages_fleet: true,
    supports_roster: true,
    supports_prewarm: false,
    supports_count: true,
    defaults: CLASSROOM_DEFAULTS,
};

/// Mints URLs against a fleet someone else keeps running
pub const URL_ONLY: Variant = Variant {
    name: "appfleet-url",
    manages_fleet: false,
    supports_roster: true,
    supports_prewarm: false,
    supports_count: true,
    defaults: Defaults {
        user: "guest",
        ..CLASSROOM_DEFAULTS
    },
};

impl Variant {
    /// Reject options the binary does not offer
    pub fn check(&self, invocation: &Invocation) -> anyhow::Result<()> {
        let unsupported = [
            (invocation.stop && !self.manages_fleet, "--stop"),
            (invocation.roster.is_some() && !self.supports_roster, "--csv"),
            (invocation.capacity.is_some() && !self.supports_prewarm, "--capacity"),
            (invocation.count.is_some() && !self.supports_count, "--count"),
        ];

        for (used, flag) in unsupported {
            if used {
                anyhow::bail!("{} is not supported by {}", flag, self.name);
            }
        }
        Ok(())
    }
}
