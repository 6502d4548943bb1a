// Copyright 2026 the Lorgnette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Placement of the fitted viewBox within the surface, as in the SVG
/// `preserveAspectRatio` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Align {
    /// Align the minimum corner on both axes.
    XMinYMin,
    /// Center horizontally, align the top edge.
    XMidYMin,
    /// Align the right edge and the top edge.
    XMaxYMin,
    /// Align the left edge, center vertically.
    XMinYMid,
    /// Center on both axes.
    #[default]
    XMidYMid,
    /// Align the right edge, center vertically.
    XMaxYMid,
    /// Align the left edge and the bottom edge.
    XMinYMax,
    /// Center horizontally, align the bottom edge.
    XMidYMax,
    /// Align the maximum corner on both axes.
    XMaxYMax,
    /// Do not force uniform scaling; the viewBox is stretched per axis.
    None,
}

impl Align {
    /// Resolves an alignment keyword.
    ///
    /// Accepts the shorthand keywords `min`/`start`, `mid`, and `max`/`end`,
    /// the literal `none`, or any of the nine raw `preserveAspectRatio`
    /// combinations (for example `"xMinYMid"`). Anything unrecognized,
    /// including the empty string, falls back to [`Align::XMidYMid`] rather
    /// than failing.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "min" | "start" | "xMinYMin" => Self::XMinYMin,
            "xMidYMin" => Self::XMidYMin,
            "xMaxYMin" => Self::XMaxYMin,
            "xMinYMid" => Self::XMinYMid,
            "mid" | "xMidYMid" => Self::XMidYMid,
            "xMaxYMid" => Self::XMaxYMid,
            "xMinYMax" => Self::XMinYMax,
            "xMidYMax" => Self::XMidYMax,
            "max" | "end" | "xMaxYMax" => Self::XMaxYMax,
            "none" => Self::None,
            _ => Self::XMidYMid,
        }
    }

    /// Returns `true` when the horizontal placement is centered.
    #[must_use]
    pub fn x_mid(self) -> bool {
        matches!(self, Self::XMidYMin | Self::XMidYMid | Self::XMidYMax)
    }

    /// Returns `true` when the horizontal placement hugs the right edge.
    #[must_use]
    pub fn x_max(self) -> bool {
        matches!(self, Self::XMaxYMin | Self::XMaxYMid | Self::XMaxYMax)
    }

    /// Returns `true` when the vertical placement is centered.
    #[must_use]
    pub fn y_mid(self) -> bool {
        matches!(self, Self::XMinYMid | Self::XMidYMid | Self::XMaxYMid)
    }

    /// Returns `true` when the vertical placement hugs the bottom edge.
    #[must_use]
    pub fn y_max(self) -> bool {
        matches!(self, Self::XMinYMax | Self::XMidYMax | Self::XMaxYMax)
    }
}

/// Whether fitted content must fit entirely inside the surface (`Meet`,
/// possibly letterboxing) or fill it entirely (`Slice`, possibly cropping).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MeetOrSlice {
    /// Scale to the smaller axis ratio so the whole viewBox is visible.
    #[default]
    Meet,
    /// Scale to the larger axis ratio so the whole surface is covered.
    Slice,
}
