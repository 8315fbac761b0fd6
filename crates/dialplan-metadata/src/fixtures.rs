//! Small hand-written tables shared by the unit tests.

use serde_json::{json, Value};

/// A V2 table (version marker present, possible lengths at slot 2).
pub(crate) fn v2_table() -> Value {
    json!({
        "version": "1.0.18",
        "country_calling_codes": {
            "1": ["US", "CA"],
            "7": ["RU", "KZ"],
            "44": ["GB", "GG"],
            "49": ["DE"],
            "54": ["AR"]
        },
        "countries": {
            "US": [
                "1",
                "[2-9]\\d{9}",
                [10],
                [
                    ["(\\d{3})(\\d{3})(\\d{4})", "($1) $2-$3", ["[2-9]"], null, null, "$1-$2-$3"]
                ],
                "1",
                null,
                null,
                null,
                null,
                null,
                [
                    ["[2-9]\\d{9}", [10]],
                    ["[2-9]\\d{9}"],
                    ["8(?:00|33|44|55|66|77|88)\\d{7}"],
                    ["900[2-9]\\d{6}"],
                    ["52(?:3(?:[2-46-9][02-9]\\d|5(?:[02-46-9]\\d|5[0-46-9]))|4(?:[2-478][02-9]\\d|5(?:[034]\\d|2[024-9]|5[0-46-9])|6(?:0[1-9]|[2-9]\\d)|9(?:[05-9]\\d|2[0-5]|49)))\\d{4}|52[34][2-9]1[02-9]\\d{4}|5(?:00|2[12]|33|44|66|77|88)[2-9]\\d{6}"]
                ]
            ],
            "RU": [
                "7",
                "[347-9]\\d{9}",
                [10],
                [
                    ["(\\d{3})(\\d{3})(\\d{2})(\\d{2})", "$1 $2-$3-$4", ["[3489]"], "8 ($1)", true]
                ],
                "8",
                null,
                "8",
                null,
                null,
                null,
                [
                    ["[347]\\d{9}", [10]],
                    ["9\\d{9}", [10]]
                ]
            ],
            "GB": [
                "44",
                "[1-357-9]\\d{9}|[18]\\d{8}|8\\d{6}",
                [7, 9, 10],
                [
                    ["(\\d{2})(\\d{4})(\\d{4})", "$1 $2 $3", ["2"]],
                    ["(\\d{4})(\\d{6})", "$1 $2", ["1"], "$1"],
                    ["(\\d{3})(\\d{3})(\\d{4})", "$1 $2 $3", ["[3589]"], "($1)"],
                    ["(\\d{4})(\\d{3})(\\d{3})", "$1 $2 $3", ["7"], null, true]
                ],
                "0",
                "0$1",
                null,
                null,
                null,
                null,
                [
                    ["[1-3]\\d{9}|[18]\\d{8}", [9, 10]],
                    ["7\\d{9}", [10]],
                    ["80[08]\\d{7}|800\\d{6}|8001111", [7, 9, 10]],
                    ["(?:8(?:4[2-5]|7[0-3])|9(?:[01]\\d|8[2-49]))\\d{7}"],
                    null,
                    null,
                    ["(?:3[0347]|55)\\d{8}", [10]]
                ]
            ],
            "GG": [
                "44",
                "(?:1481|[357-9]\\d{3})\\d{6}|8\\d{6}(?:\\d{2})?",
                [7, 9, 10],
                null,
                "0",
                null,
                "([25-9]\\d{5})$|0",
                "1481$1",
                null,
                "1481"
            ],
            "DE": [
                "49",
                "[1-35-9]\\d{3,14}|4(?:[0-8]\\d{3,12}|9(?:[0-37]\\d|4(?:[1-35-8]|4\\d?)|5\\d{1,2}|6[1-8]\\d?)\\d{2,8})",
                [4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
                [
                    ["(\\d{3})(\\d{4,11})", "$1 $2", ["3[02]|40|[68]9"]]
                ]
            ],
            "AR": [
                "54",
                "(?:11|[89]\\d\\d)\\d{8}|[2368]\\d{9}",
                [10, 11],
                null,
                "0",
                "0$1",
                "0?(?:(11|2(?:2(?:02?|[13]|2[13-79]|4[1-6]|5[2457]|6[124-8]|7[1-4]|8[13-6]|9[1267])|3(?:02?|1[467]|2[03-6]|3[13-8]|[49][2-6]|5[2-8]|[67])|4(?:7[3-578]|9)|6(?:[0136]|2[24-6]|4[6-8]?|5[15-8])|80|9(?:0[1-3]|[19]|2\\d|3[1-6]|4[02568]?|5[2-4]|6[2-46]|72?|8[23]?))|3(?:3(?:2[79]|6|8[2578])|4(?:0[0-24-9]|[12]|3[5-8]?|4[24-7]|5[4-68]?|6[02-9]|7[126]|8[2379]?|9[1-36-8])|5(?:1|2[1245]|3[237]?|4[1-46-9]|6[2-4]|7[1-6]|8[2-5]?)|6[24]|7(?:[069]|1[1568]|2[15]|3[145]|4[13]|5[14-8]|7[2-57]|8[126])|8(?:[01]|2[15-7]|3[2578]?|4[13-6]|5[4-8]?|6[1-357-9]|7[36-8]?|8[5-8]?|9[124])))15)?",
                "9$1",
                null,
                null,
                []
            ]
        }
    })
}

/// A V1 table (no version marker, no possible lengths).
pub(crate) fn v1_table() -> Value {
    json!({
        "country_phone_code_to_countries": {
            "1": ["US"],
            "44": ["GB"]
        },
        "countries": {
            "US": [
                "1",
                "[2-9]\\d{9}",
                [
                    ["(\\d{3})(\\d{3})(\\d{4})", "($1) $2-$3", ["[2-9]"]]
                ],
                "1",
                null,
                null,
                null,
                null,
                null,
                ["[2-9]\\d{9}", "[2-9]\\d{9}"]
            ],
            "GB": [
                "44",
                "\\d{10}",
                [
                    ["(\\d{2})(\\d{4})(\\d{4})", "$1 $2 $3", ["2"]]
                ],
                "0",
                "0$1",
                null,
                null,
                true,
                null,
                ["[1-3]\\d{9}", "7\\d{9}"]
            ]
        }
    })
}

/// A reduced table: calling code `7` lists `KZ` first, but only `RU` is
/// present.
pub(crate) fn reduced_table() -> Value {
    json!({
        "version": "1.0.18",
        "country_calling_codes": {
            "1": ["US"],
            "7": ["KZ", "RU"]
        },
        "countries": {
            "US": ["1", "[2-9]\\d{9}", [10]],
            "RU": ["7", "[347-9]\\d{9}", [10]]
        }
    })
}
