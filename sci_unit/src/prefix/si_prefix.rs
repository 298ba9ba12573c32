/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

prefix_enum!(
    /// Decimal SI prefixes, from yocto (10⁻²⁴) to yotta (10²⁴).
    SiPrefix,
    10,
    [
        Yocto = -24, "y",
        Zepto = -21, "z",
        Atto = -18, "a",
        Femto = -15, "f",
        Pico = -12, "p",
        Nano = -9, "n",
        Micro = -6, "µ",
        Milli = -3, "m",
        Centi = -2, "c",
        Deci = -1, "d",
        Unit = 0, "",
        Deca = 1, "da",
        Hecto = 2, "h",
        Kilo = 3, "k",
        Mega = 6, "M",
        Giga = 9, "G",
        Tera = 12, "T",
        Peta = 15, "P",
        Exa = 18, "E",
        Zetta = 21, "Z",
        Yotta = 24, "Y",
    ]
);
