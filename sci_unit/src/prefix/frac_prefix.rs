/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

prefix_enum!(
    /// Fractional prefixes (eg. for seconds), in steps of a thousand.
    FracPrefix,
    1000,
    [
        Yocto = -8, "y",
        Zepto = -7, "z",
        Atto = -6, "a",
        Femto = -5, "f",
        Pico = -4, "p",
        Nano = -3, "n",
        Micro = -2, "µ",
        Milli = -1, "m",
        Unit = 0, "",
    ]
);
