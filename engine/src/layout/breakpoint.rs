use std::fmt;

/// Responsive breakpoints, each active from its minimum viewport width upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Breakpoint {
    Base,
    Sm,
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 5] = [
        Breakpoint::Base,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
    ];

    pub const fn min_width_px(self) -> u32 {
        match self {
            Breakpoint::Base => 0,
            Breakpoint::Sm => 640,
            Breakpoint::Md => 768,
            Breakpoint::Lg => 1024,
            Breakpoint::Xl => 1280,
        }
    }

    /// Class prefix, empty for the base tier.
    pub const fn prefix(self) -> &'static str {
        match self {
            Breakpoint::Base => "",
            Breakpoint::Sm => "sm:",
            Breakpoint::Md => "md:",
            Breakpoint::Lg => "lg:",
            Breakpoint::Xl => "xl:",
        }
    }

    /// The widest breakpoint active at `width_px`.
    pub fn for_width(width_px: u32) -> Breakpoint {
        Self::ALL
            .into_iter()
            .rev()
            .find(|bp| width_px >= bp.min_width_px())
            .unwrap_or(Breakpoint::Base)
    }

    pub fn is_active_at(self, width_px: u32) -> bool {
        width_px >= self.min_width_px()
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Breakpoint::Base => "base",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_for_width() {
        assert_eq!(Breakpoint::for_width(0), Breakpoint::Base);
        assert_eq!(Breakpoint::for_width(639), Breakpoint::Base);
        assert_eq!(Breakpoint::for_width(640), Breakpoint::Sm);
        assert_eq!(Breakpoint::for_width(1023), Breakpoint::Md);
        assert_eq!(Breakpoint::for_width(1024), Breakpoint::Lg);
        assert_eq!(Breakpoint::for_width(4000), Breakpoint::Xl);
    }
}
