use std::fmt::Display;

/// Environment variable set by npm-family tools when they invoke a script
/// or an initializer. E.g. `pnpm/8.15.4 npm/? node/v20.11.1 linux x64`.
pub const USER_AGENT_VAR: &str = "npm_config_user_agent";

/// The package managers sprout knows how to drive. Detection never fails:
/// anything absent or unrecognized falls back to [`PackageManager::Npm`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
    Bun,
    Deno,
}

/// Ordered detection rules. `pnpm` must come before the npm fallback since
/// a pnpm user agent also carries the `npm` substring.
const RULES: &[(&str, PackageManager)] = &[
    ("pnpm", PackageManager::Pnpm),
    ("yarn", PackageManager::Yarn),
    ("bun", PackageManager::Bun),
    ("deno", PackageManager::Deno),
];

impl PackageManager {
    /// Classify a user-agent string. Pure: the same input always yields the
    /// same manager, and every input yields one.
    #[must_use]
    pub fn detect(user_agent: Option<&str>) -> Self {
        let Some(agent) = user_agent else {
            return Self::Npm;
        };

        RULES
            .iter()
            .find(|(needle, _)| agent.contains(needle))
            .map_or(Self::Npm, |&(_, pm)| pm)
    }

    /// Detect from the invoking process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::detect(std::env::var(USER_AGENT_VAR).ok().as_deref())
    }

    #[must_use]
    pub fn binary(self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
            Self::Bun => "bun",
            Self::Deno => "deno",
        }
    }

    /// Full install command line, or [`None`] for runtimes that fetch
    /// dependencies on first run.
    #[must_use]
    pub fn install_command(self) -> Option<&'static str> {
        match self {
            Self::Npm => Some("npm install"),
            Self::Pnpm => Some("pnpm install"),
            Self::Yarn => Some("yarn"),
            Self::Bun => Some("bun install"),
            Self::Deno => None,
        }
    }

    /// Command line that runs a manifest script, e.g. `run_command("dev")`.
    #[must_use]
    pub fn run_command(self, script: &str) -> String {
        match self {
            Self::Npm => format!("npm run {script}"),
            Self::Pnpm => format!("pnpm {script}"),
            Self::Yarn => format!("yarn {script}"),
            Self::Bun => format!("bun run {script}"),
            Self::Deno => format!("deno task {script}"),
        }
    }
}

impl Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.binary())
    }
}

#[cfg(test)]
mod tests {
    use super::PackageManager::{self, *};

    #[test]
    fn detects_each_manager() {
        let cases = [
            ("npm/10.2.4 node/v20.11.1 linux x64 workspaces/false", Npm),
            ("pnpm/8.15.4 npm/? node/v20.11.1 linux x64", Pnpm),
            ("yarn/1.22.21 npm/? node/v20.11.1 linux x64", Yarn),
            ("bun/1.0.29 npm/? node/v20.11.1 linux x64", Bun),
            ("deno/1.41.0 npm/? deno/1.41.0 linux x86_64", Deno),
        ];

        for (agent, expected) in cases {
            assert_eq!(PackageManager::detect(Some(agent)), expected, "{agent}");
        }
    }

    #[test]
    fn defaults_to_npm() {
        assert_eq!(PackageManager::detect(None), Npm);
        assert_eq!(PackageManager::detect(Some("")), Npm);
        assert_eq!(PackageManager::detect(Some("cargo/1.76.0")), Npm);
    }

    #[test]
    fn first_rule_wins_on_ambiguous_agents() {
        // Both substrings present: priority order decides, not position in
        // the agent string.
        assert_eq!(PackageManager::detect(Some("yarn/4.1.0 pnpm/8.15.4")), Pnpm);
        assert_eq!(PackageManager::detect(Some("bun/1.0.29 yarn/1.22.21")), Yarn);
    }

    #[test]
    fn install_commands() {
        assert_eq!(Npm.install_command(), Some("npm install"));
        assert_eq!(Yarn.install_command(), Some("yarn"));
        assert_eq!(Deno.install_command(), None);
    }

    #[test]
    fn run_commands() {
        assert_eq!(Npm.run_command("dev"), "npm run dev");
        assert_eq!(Pnpm.run_command("dev"), "pnpm dev");
        assert_eq!(Deno.run_command("dev"), "deno task dev");
    }
}
