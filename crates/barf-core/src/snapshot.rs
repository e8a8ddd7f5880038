use serde::{Deserialize, Serialize};

use crate::REGISTRY_VERSION;
use crate::registry::{Command, LedMode, Method, Sentinel};

/// Versioned dump of the whole registry with deterministic ordering.
///
/// A snapshot is what independently built endpoints exchange (or commit) to
/// prove their registries agree. Entry order follows declaration order and
/// is stable across runs and builds of the same registry.
///
/// # Examples
/// ```
/// use barf_core::RegistrySnapshot;
///
/// let snapshot = RegistrySnapshot::current();
/// assert_eq!(snapshot.registry_version, barf_core::REGISTRY_VERSION);
/// assert_eq!(snapshot.commands.len(), 22);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    /// Snapshot schema version (not the crate version).
    pub registry_version: u32,
    /// Method entries in wire-code order.
    pub methods: Vec<CodeEntry>,
    /// LED mode entries in wire-code order.
    pub led_modes: Vec<CodeEntry>,
    /// Sentinel entries in declaration order.
    pub sentinels: Vec<StringEntry>,
    /// Command entries in declaration order.
    pub commands: Vec<StringEntry>,
}

/// Registry entry whose wire form is a small integer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeEntry {
    /// Logical name (e.g., "get", "activity").
    pub name: String,
    /// Wire code.
    pub code: u8,
}

/// Registry entry whose wire form is a string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StringEntry {
    /// Logical name (e.g., "path_fragment").
    pub name: String,
    /// Wire string (e.g., "path_frament").
    pub value: String,
}

/// Single divergence between two registry snapshots.
///
/// # Examples
/// ```
/// use barf_core::Mismatch;
///
/// let mismatch = Mismatch {
///     id: "BARF-REG-VALUE".to_string(),
///     message: "commands entry 'connect': expected \"connect\", found \"conect\"".to_string(),
/// };
/// assert!(mismatch.message.contains("connect"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mismatch {
    /// Stable mismatch identifier (e.g., `BARF-REG-VALUE`).
    pub id: String,
    /// Human-readable description of the divergence.
    pub message: String,
}

impl RegistrySnapshot {
    /// Snapshot of the registry compiled into this build.
    pub fn current() -> Self {
        RegistrySnapshot {
            registry_version: REGISTRY_VERSION,
            methods: Method::ALL
                .into_iter()
                .map(|method| CodeEntry {
                    name: method.name().to_string(),
                    code: method.code(),
                })
                .collect(),
            led_modes: LedMode::ALL
                .into_iter()
                .map(|mode| CodeEntry {
                    name: mode.name().to_string(),
                    code: mode.code(),
                })
                .collect(),
            sentinels: Sentinel::ALL
                .into_iter()
                .map(|sentinel| StringEntry {
                    name: sentinel.name().to_string(),
                    value: sentinel.as_str().to_string(),
                })
                .collect(),
            commands: Command::ALL
                .into_iter()
                .map(|command| StringEntry {
                    name: command.name().to_string(),
                    value: command.tag().to_string(),
                })
                .collect(),
        }
    }

    /// Compare this snapshot (treated as canonical) against another copy.
    ///
    /// Returns one [`Mismatch`] per divergence, in deterministic order; an
    /// empty vec means the two registries are wire-compatible.
    pub fn diff(&self, other: &RegistrySnapshot) -> Vec<Mismatch> {
        let mut mismatches = Vec::new();

        if self.registry_version != other.registry_version {
            mismatches.push(Mismatch {
                id: "BARF-REG-VERSION".to_string(),
                message: format!(
                    "registry version mismatch: expected {}, found {}",
                    self.registry_version, other.registry_version
                ),
            });
        }

        diff_section(
            "methods",
            &code_pairs(&self.methods),
            &code_pairs(&other.methods),
            &mut mismatches,
        );
        diff_section(
            "led_modes",
            &code_pairs(&self.led_modes),
            &code_pairs(&other.led_modes),
            &mut mismatches,
        );
        diff_section(
            "sentinels",
            &string_pairs(&self.sentinels),
            &string_pairs(&other.sentinels),
            &mut mismatches,
        );
        diff_section(
            "commands",
            &string_pairs(&self.commands),
            &string_pairs(&other.commands),
            &mut mismatches,
        );

        mismatches
    }
}

fn code_pairs(entries: &[CodeEntry]) -> Vec<(String, String)> {
    entries
        .iter()
        .map(|entry| (entry.name.clone(), entry.code.to_string()))
        .collect()
}

fn string_pairs(entries: &[StringEntry]) -> Vec<(String, String)> {
    entries
        .iter()
        .map(|entry| (entry.name.clone(), format!("{:?}", entry.value)))
        .collect()
}

fn diff_section(
    section: &str,
    expected: &[(String, String)],
    found: &[(String, String)],
    mismatches: &mut Vec<Mismatch>,
) {
    for (name, expected_value) in expected {
        let found_values: Vec<&String> = found
            .iter()
            .filter(|(other, _)| other == name)
            .map(|(_, value)| value)
            .collect();
        if found_values.is_empty() {
            mismatches.push(Mismatch {
                id: "BARF-REG-MISSING".to_string(),
                message: format!("{} entry '{}' is missing", section, name),
            });
            continue;
        }
        // Every occurrence must agree; a correct copy must not mask a
        // divergent duplicate of the same name.
        for found_value in found_values {
            if found_value != expected_value {
                mismatches.push(Mismatch {
                    id: "BARF-REG-VALUE".to_string(),
                    message: format!(
                        "{} entry '{}': expected {}, found {}",
                        section, name, expected_value, found_value
                    ),
                });
            }
        }
    }

    for (index, (name, _)) in found.iter().enumerate() {
        if !expected.iter().any(|(other, _)| other == name) {
            mismatches.push(Mismatch {
                id: "BARF-REG-EXTRA".to_string(),
                message: format!("{} entry '{}' is not in the registry", section, name),
            });
        }
        if found[..index].iter().any(|(other, _)| other == name) {
            mismatches.push(Mismatch {
                id: "BARF-REG-DUPLICATE".to_string(),
                message: format!("{} entry '{}' is listed more than once", section, name),
            });
        }
    }
}
