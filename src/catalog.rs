//! Static product content for the tour: features, FAQs, and releases.
//!
//! This is the marketing copy for Glow, held as data so the showcase
//! screens stay purely presentational. Each record carries a stable
//! identity key used by the selection state machine.

use once_cell::sync::Lazy;

use crate::showcase::Selectable;

// ============================================================================
// Features
// ============================================================================

/// Badge category attached to a feature card; each maps to an accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeType {
    Core,
    Flexible,
    Exclusive,
    Beta,
    Smart,
    Design,
    Pro,
    Power,
}

#[derive(Debug, Clone)]
pub struct Feature {
    /// Stable identity for selection.
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub details: [&'static str; 4],
    pub badge: &'static str,
    pub badge_type: BadgeType,
}

impl Selectable for Feature {
    fn key(&self) -> &str {
        self.id
    }
}

pub static FEATURES: Lazy<Vec<Feature>> = Lazy::new(|| {
    vec![
        Feature {
            id: "organization",
            title: "3-Section Organization",
            description: "Divide your menu bar into Visible, Hidden, and Always-Hidden \
                sections. Drag & drop icons between sections effortlessly.",
            details: [
                "Visible Section - Always displayed icons",
                "Hidden Section - Revealed on demand",
                "Always Hidden - Apps you never need",
                "Fluid drag & drop reorganization",
            ],
            badge: "Core",
            badge_type: BadgeType::Core,
        },
        Feature {
            id: "reveal",
            title: "Reveal Methods",
            description: "Access hidden icons your way: keyboard shortcuts, mouse hover, \
                click, scroll gestures, or menu toggle.",
            details: [
                "Customizable keyboard shortcuts",
                "Hover with configurable delay",
                "Click empty area to toggle",
                "Scroll gestures support",
            ],
            badge: "Flexible",
            badge_type: BadgeType::Flexible,
        },
        Feature {
            id: "glass",
            title: "Liquid Glass Effects",
            description: "Stunning translucent materials that adapt to your wallpaper. \
                10+ color variants with full customization.",
            details: [
                "Wallpaper-adaptive colors",
                "Separate light/dark configs",
                "Custom radius, borders, shadows",
                "Smooth state transitions",
            ],
            badge: "Exclusive",
            badge_type: BadgeType::Exclusive,
        },
        Feature {
            id: "animations",
            title: "Fluid Animations",
            description: "Ultra-smooth, buttery animations with <16ms latency. Adaptive \
                performance that optimizes for your display.",
            details: [
                "Incredibly fluid transitions",
                "Adaptive performance",
                "Intelligent rendering",
                "<16ms guaranteed latency",
            ],
            badge: "Beta",
            badge_type: BadgeType::Beta,
        },
        Feature {
            id: "autohide",
            title: "Smart Auto-Hide",
            description: "Context-aware auto-hiding that adapts to your workflow. Choose \
                between smart, timed, or manual strategies.",
            details: [
                "Smart context-aware behavior",
                "Configurable timers (0-30s)",
                "Manual on-demand control",
                "Intelligent activity detection",
            ],
            badge: "Smart",
            badge_type: BadgeType::Smart,
        },
        Feature {
            id: "customization",
            title: "Visual Customization",
            description: "Full-width or split design, gradients, borders, shadows, and \
                opacity. Real-time preview as you customize.",
            details: [
                "Full-width or split layout",
                "Real-time preview",
                "Multiple material options",
                "Border & shadow control",
            ],
            badge: "Design",
            badge_type: BadgeType::Design,
        },
        Feature {
            id: "multimonitor",
            title: "Multi-Monitor Support",
            description: "Per-monitor configuration, space-aware behavior, and MacBook \
                notch support for professional setups.",
            details: [
                "Per-display settings",
                "Space-aware behavior",
                "MacBook notch optimized",
                "Seamless transitions",
            ],
            badge: "Pro",
            badge_type: BadgeType::Pro,
        },
        Feature {
            id: "automation",
            title: "Workflow Automation",
            description: "Custom hotkeys, Command-drag reveal, context menus, and quick \
                toggles for maximum productivity.",
            details: [
                "Any keyboard combination",
                "Command-drag reveal",
                "Right-click quick actions",
                "Instant toggle access",
            ],
            badge: "Power",
            badge_type: BadgeType::Power,
        },
    ]
});

// ============================================================================
// FAQ
// ============================================================================

#[derive(Debug, Clone)]
pub struct Faq {
    /// The question doubles as the identity key.
    pub question: &'static str,
    pub answer: &'static str,
}

impl Selectable for Faq {
    fn key(&self) -> &str {
        self.question
    }
}

pub static FAQS: Lazy<Vec<Faq>> = Lazy::new(|| {
    vec![
        Faq {
            question: "What's included in the price?",
            answer: "The $5.99 launch price includes the full version of Glow with all \
                features, lifetime updates for version 1.x, and a license for up to 3 devices.",
        },
        Faq {
            question: "Is this a subscription?",
            answer: "No! Glow is a one-time purchase. Pay once and use it forever. No \
                recurring charges, no hidden fees.",
        },
        Faq {
            question: "What about future updates?",
            answer: "All updates for version 1.x are included free. When version 2.0 is \
                released (if ever), upgrade pricing will be offered at a significant discount.",
        },
        Faq {
            question: "What are Fluid Animations?",
            answer: "Fluid Animations are our ultra-smooth animation system that makes your \
                menu bar feel incredibly responsive and alive. We're calling it Beta because \
                we're continuously improving and refining the experience based on user \
                feedback. It works great on all Macs running macOS 26+.",
        },
        Faq {
            question: "Can I use Glow on multiple Macs?",
            answer: "Yes! Your license allows installation on up to 3 Macs that you \
                personally own and use.",
        },
        Faq {
            question: "What's your refund policy?",
            answer: "We offer a 30-day money-back guarantee. If Glow doesn't meet your \
                expectations, contact us for a full refund within 30 days of purchase.",
        },
        Faq {
            question: "How does Glow compare to Bartender?",
            answer: "Glow features exclusive Fluid Animations and Liquid Glass effects that \
                you won't find anywhere else. We also offer a one-time purchase instead of a \
                subscription, better performance (<16ms latency), and modern architecture \
                built with Swift 6.2.",
        },
        Faq {
            question: "Is Glow on the Mac App Store?",
            answer: "Currently, Glow is only available as a direct download from our \
                website. This allows us to offer better pricing and faster updates.",
        },
    ]
});

// ============================================================================
// Changelog
// ============================================================================

/// Release maturity tag shown on each timeline node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseTag {
    Upcoming,
    Beta,
    Stable,
}

impl ReleaseTag {
    pub fn label(self) -> &'static str {
        match self {
            ReleaseTag::Upcoming => "upcoming",
            ReleaseTag::Beta => "beta",
            ReleaseTag::Stable => "stable",
        }
    }
}

/// Kind of change inside a release's grouped notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Feature,
    Improved,
    Fixed,
    Removed,
    Security,
}

impl ChangeKind {
    pub fn label(self) -> &'static str {
        match self {
            ChangeKind::Added => "Added",
            ChangeKind::Feature => "Features",
            ChangeKind::Improved => "Improved",
            ChangeKind::Fixed => "Fixed",
            ChangeKind::Removed => "Removed",
            ChangeKind::Security => "Security",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChangeGroup {
    pub kind: ChangeKind,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone)]
pub struct Release {
    /// Version string, the identity key for timeline selection.
    pub version: &'static str,
    pub date: &'static str,
    pub tag: ReleaseTag,
    pub summary: &'static str,
    pub changes: &'static [ChangeGroup],
}

impl Selectable for Release {
    fn key(&self) -> &str {
        self.version
    }
}

/// Releases as authored: newest first.
pub static RELEASES: Lazy<Vec<Release>> = Lazy::new(|| {
    vec![
        Release {
            version: "1.0.0",
            date: "Coming Soon",
            tag: ReleaseTag::Upcoming,
            summary: "Initial public release with all core features, Fluid Animations, \
                and Liquid Glass effects.",
            changes: &[
                ChangeGroup {
                    kind: ChangeKind::Added,
                    items: &[
                        "Initial release of Glow",
                        "3-Section menu bar organization",
                        "Fluid Animations (Beta)",
                        "Liquid Glass visual effects",
                        "Drag & drop icon reordering",
                        "Multiple reveal methods",
                        "Custom keyboard shortcuts",
                        "Usage-based suggestions",
                        "macOS 26 optimized",
                    ],
                },
                ChangeGroup {
                    kind: ChangeKind::Feature,
                    items: &[
                        "<16ms response time",
                        "Event-driven architecture",
                        "Sandboxed for security",
                        "Native SwiftUI",
                    ],
                },
            ],
        },
        Release {
            version: "0.9.0",
            date: "November 2025",
            tag: ReleaseTag::Beta,
            summary: "Beta release for early testers with core functionality and initial \
                Liquid Glass implementation.",
            changes: &[
                ChangeGroup {
                    kind: ChangeKind::Added,
                    items: &[
                        "Beta release for testers",
                        "Core menu bar management",
                        "Basic icon hiding/revealing",
                        "Initial Liquid Glass effects",
                    ],
                },
                ChangeGroup {
                    kind: ChangeKind::Improved,
                    items: &[
                        "Apple Silicon optimizations",
                        "Reduced memory footprint",
                    ],
                },
                ChangeGroup {
                    kind: ChangeKind::Fixed,
                    items: &[
                        "Icon spacing consistency",
                        "Menu bar overlap issues",
                    ],
                },
            ],
        },
        Release {
            version: "0.8.0",
            date: "October 2025",
            tag: ReleaseTag::Beta,
            summary: "Internal alpha with foundational architecture and basic menu bar \
                control.",
            changes: &[ChangeGroup {
                kind: ChangeKind::Added,
                items: &[
                    "Initial project setup",
                    "Basic menu bar detection",
                    "Icon enumeration",
                    "Simple hide/show toggle",
                ],
            }],
        },
    ]
});

/// Releases in timeline order: oldest first. This is the consumer list for
/// the changelog showcase, so the active index doubles as the timeline
/// position.
pub fn releases_chronological() -> Vec<Release> {
    RELEASES.iter().rev().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_counts() {
        assert_eq!(FEATURES.len(), 8);
        assert_eq!(FAQS.len(), 8);
        assert_eq!(RELEASES.len(), 3);
    }

    #[test]
    fn test_feature_ids_unique() {
        let mut ids: Vec<_> = FEATURES.iter().map(|f| f.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), FEATURES.len());
    }

    #[test]
    fn test_chronological_order_is_reversed() {
        let chrono = releases_chronological();
        assert_eq!(chrono.first().map(|r| r.version), Some("0.8.0"));
        assert_eq!(chrono.last().map(|r| r.version), Some("1.0.0"));
    }
}
