/// Enumerations used by style properties.
///
/// Every enumeration maps one-to-one onto the WordprocessingML tokens it is written
/// as. Aliases accepted on input are listed after the canonical token.
use super::value::xml_enum;

xml_enum! {
    /// Paragraph justification (`w:jc`).
    pub enum Alignment {
        Left => "left",
        Center => "center",
        Right => "right",
        /// Justified; `justify` is accepted as an alias.
        Both => "both" | "justify",
        Start => "start",
        End => "end",
        Distribute => "distribute",
    }
}

xml_enum! {
    /// Table placement on the page.
    pub enum TableAlignment {
        Left => "left",
        Center => "center",
        Right => "right",
    }
}

xml_enum! {
    /// Underline style (`w:u`).
    pub enum Underline {
        None => "none",
        Single => "single",
        Words => "words",
        Double => "double",
        Thick => "thick" | "heavy",
        Dotted => "dotted",
        DottedHeavy => "dottedHeavy",
        Dash => "dash",
        DashedHeavy => "dashedHeavy" | "dashHeavy",
        DashLong => "dashLong",
        DashLongHeavy => "dashLongHeavy",
        DotDash => "dotDash",
        DashDotHeavy => "dashDotHeavy" | "dotDashHeavy",
        DotDotDash => "dotDotDash",
        DashDotDotHeavy => "dashDotDotHeavy" | "dotDotDashHeavy",
        Wave => "wave" | "wavy",
        WavyHeavy => "wavyHeavy",
        WavyDouble => "wavyDouble",
    }
}

xml_enum! {
    /// Text highlight color (`w:highlight`).
    pub enum Highlight {
        Black => "black",
        Blue => "blue",
        Cyan => "cyan",
        Green => "green",
        Magenta => "magenta",
        Red => "red",
        Yellow => "yellow",
        White => "white",
        DarkBlue => "darkBlue",
        DarkCyan => "darkCyan",
        DarkGreen => "darkGreen",
        DarkMagenta => "darkMagenta",
        DarkRed => "darkRed",
        DarkYellow => "darkYellow",
        DarkGray => "darkGray",
        LightGray => "lightGray",
        None => "none",
    }
}

xml_enum! {
    /// Font slot hint (`w:rFonts/@w:hint`).
    pub enum FontHint {
        Default => "default",
        EastAsia => "eastAsia",
        ComplexScript => "cs",
    }
}

xml_enum! {
    /// What a font style is registered for.
    pub enum FontKind {
        Text => "text",
        Paragraph => "paragraph",
        Link => "link",
        Title => "title",
    }
}

xml_enum! {
    /// Tab stop type.
    pub enum TabType {
        Clear => "clear",
        Left => "left",
        Center => "center",
        Right => "right",
        Decimal => "decimal",
        Bar => "bar",
        Num => "num",
    }
}

xml_enum! {
    /// Tab leader character.
    pub enum TabLeader {
        None => "none",
        Dot => "dot",
        Hyphen => "hyphen",
        Underscore => "underscore",
        Heavy => "heavy",
        MiddleDot => "middleDot",
    }
}

xml_enum! {
    /// Line spacing rule (`w:spacing/@w:lineRule`).
    pub enum LineSpacingRule {
        Auto => "auto",
        Exact => "exact",
        AtLeast => "atLeast",
    }
}

xml_enum! {
    /// Width unit for tables and cells.
    pub enum WidthUnit {
        Auto => "auto",
        Percent => "pct",
        Twips => "dxa",
        Nil => "nil",
    }
}

xml_enum! {
    /// Vertical alignment inside a table cell.
    pub enum CellVerticalAlign {
        Top => "top",
        Center => "center",
        Both => "both",
        Bottom => "bottom",
    }
}

xml_enum! {
    /// Text flow direction inside a table cell.
    pub enum TextDirection {
        LrTb => "lrTb",
        TbRl => "tbRl",
        BtLr => "btLr",
        LrTbV => "lrTbV",
        TbRlV => "tbRlV",
        TbLrV => "tbLrV",
    }
}

xml_enum! {
    /// Vertical merge state of a table cell.
    pub enum VerticalMerge {
        Restart => "restart",
        Continue => "continue",
    }
}

xml_enum! {
    /// Page orientation.
    pub enum Orientation {
        Portrait => "portrait",
        Landscape => "landscape",
    }
}

xml_enum! {
    /// How a section starts relative to the previous one (`w:type`).
    pub enum SectionBreak {
        NextPage => "nextPage",
        NextColumn => "nextColumn",
        Continuous => "continuous",
        EvenPage => "evenPage",
        OddPage => "oddPage",
    }
}

xml_enum! {
    /// When line numbering restarts.
    pub enum LineNumberRestart {
        NewPage => "newPage",
        NewSection => "newSection",
        Continuous => "continuous",
    }
}

xml_enum! {
    /// How an image sits relative to surrounding text.
    pub enum WrappingStyle {
        Inline => "inline",
        Behind => "behind",
        InFront => "infront",
        Square => "square",
        Tight => "tight",
    }
}

xml_enum! {
    /// Which pages a header or footer applies to.
    pub enum HeaderFooterType {
        Default => "default",
        First => "first",
        Even => "even",
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::Portrait
    }
}

impl Default for WrappingStyle {
    fn default() -> Self {
        Self::Inline
    }
}

impl Default for FontKind {
    fn default() -> Self {
        Self::Text
    }
}

impl Default for HeaderFooterType {
    fn default() -> Self {
        Self::Default
    }
}
