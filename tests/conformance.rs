use chromakit::{
    complementary, contrast, contrast_of, convert, dyad, harmony, hex, lab, mix, palette, parse,
    rgb, triad, Color, ContrastSettings, Error, Format, HarmonySettings, MixSettings, Mixed,
    PaletteSettings, Scheme,
};
use pretty_assertions::assert_eq;

const SAMPLES: [&str; 12] = [
    "#000000",
    "#ffffff",
    "#d2691e",
    "rgb(12 200 99 / 0.25)",
    "hsl(200 40% 30%)",
    "hwb(280 15% 25%)",
    "lab(70% -40 20)",
    "lch(40% 60 300)",
    "oklab(55% 0.1 -0.1)",
    "oklch(80% 0.1 120 / 50%)",
    "device-cmyk(10% 20% 30% 40%)",
    "rebeccapurple",
];

fn settings<T: serde::de::DeserializeOwned>(json: &str) -> T {
    serde_json::from_str(json).unwrap()
}

#[test]
fn hex_of_black_and_white() {
    assert_eq!(hex("rgb(0,0,0)").unwrap(), "#000000");
    assert_eq!(hex("rgb(255,255,255)").unwrap(), "#ffffff");
}

#[test]
fn harmony_fixtures() {
    assert_eq!(complementary("red").unwrap(), ["#ff0000", "#00a9db"]);
    assert_eq!(triad("blue").unwrap(), ["#0000ff", "#ce0000", "#007700"]);
    assert_eq!(dyad("purple").unwrap(), ["#800080", "#931700"]);

    let settings: HarmonySettings = settings(r#"{"scheme": "triad"}"#);
    assert_eq!(
        harmony(&settings, "blue").unwrap(),
        triad("blue").unwrap()
    );
}

#[test]
fn mix_fixtures() {
    let strength_0: MixSettings = settings(r#"{"target": "orange", "strength": 0}"#);
    let strength_100: MixSettings = settings(r#"{"target": "orange", "strength": 100}"#);
    assert_eq!(
        mix(&strength_0, "red").unwrap(),
        Mixed::Single("#ff0000".into())
    );
    assert_eq!(
        mix(&strength_100, "red").unwrap(),
        Mixed::Single("#ffa500".into())
    );

    let stepped: MixSettings = settings(r#"{"target": "cyan", "strength": 100, "steps": 5}"#);
    let Mixed::Steps(steps) = mix(&stepped, "red").unwrap() else {
        panic!("expected a gradient");
    };
    assert_eq!(
        steps,
        ["#f2674f", "#df957e", "#c3bca9", "#94ded4", "#00ffff"]
    );
}

#[test]
fn contrast_fixture() {
    let result = contrast_of(
        &settings::<ContrastSettings>("{}"),
        &settings::<PaletteSettings>("{}"),
        "crimson",
    )
    .unwrap();
    let strings = result.to_strings(Format::Hex);

    assert_eq!(strings[0], ["#ffffff", "#111111"]);
    assert!(strings[1].is_empty(), "tints are rejected: {:?}", strings[1]);
    assert_eq!(strings[2].len(), 3, "shades are accepted");
    assert_eq!(strings.last().unwrap().len(), 3);

    let palette = palette(&PaletteSettings::default(), "crimson").unwrap();
    assert_eq!(
        contrast(&ContrastSettings::default(), &palette).unwrap(),
        result
    );
}

#[test]
fn invalid_input_is_a_parse_error() {
    let is_parse_error = |result: Result<_, Error>| matches!(result, Err(Error::Parse(_)));

    assert!(is_parse_error(hex("invalid").map(|_| ())));
    assert!(is_parse_error(rgb("invalid").map(|_| ())));
    assert!(is_parse_error(lab("invalid").map(|_| ())));
    for scheme in Scheme::ALL {
        let settings = HarmonySettings {
            scheme,
            accented: false,
        };
        assert!(is_parse_error(harmony(&settings, "invalid").map(|_| ())));
    }
    let settings: MixSettings = settings(r#"{"target": "orange"}"#);
    assert!(is_parse_error(mix(&settings, "invalid").map(|_| ())));
}

#[test]
fn round_trip_every_format() {
    for input in SAMPLES {
        let color = parse(input).unwrap();
        let expected = color.to_format(Format::Hex);

        for format in Format::ALL {
            let serialized = color.to_format(format);
            let back = parse(&serialized)
                .unwrap_or_else(|e| panic!("{input} as {format}: {serialized}: {e}"));
            assert_eq!(back.to_format(Format::Hex), expected, "{input} via {serialized}");
            assert!(
                (back.alpha() - color.alpha()).abs() <= 0.002,
                "{input} via {serialized}"
            );
        }
    }
}

#[test]
fn convert_is_idempotent() {
    for input in SAMPLES {
        for format in Format::ALL {
            let once = convert(input, format).unwrap();
            let twice = convert(&once, format).unwrap();
            assert_eq!(once, twice, "{input} as {format}");
        }
    }
}

#[test]
fn grammar() {
    let accepted = [
        "#abc",
        "#ABCD",
        "rgb(1,2,3)",
        "rgba(1, 2, 3, 0.5)",
        "RGB(1 2 3 / 50%)",
        "hsl(1.5turn 10% 10%)",
        "hsla(90, 10%, 10%, 1)",
        "hwb(0.25turn 0% 0%)",
        "lab(50 -128 128)",
        "lch(50% 230 -30)",
        "oklab(0.5 -0.4 0.4)",
        "oklch(1 0.4 3.14rad)",
        "device-cmyk(1 0 0 0)",
        "Crimson",
    ];
    for input in accepted {
        assert!(parse(input).is_ok(), "{input}");
    }

    let shape_errors = [
        "",
        "#12",
        "rgb(1 2)",
        "rgb(1, 2 3)",
        "hwb(1, 2%, 3%)",
        "lab(1 2 3",
        "lab(1 2 3))",
        "oklch(0.5 0.1 30deg )x",
        "transparent",
        "rgb(1e1 2 3)",
    ];
    for input in shape_errors {
        assert!(matches!(parse(input), Err(Error::Parse(_))), "{input}");
    }

    let range_errors = [
        "rgb(256 0 0)",
        "rgb(0 0 0 / 2)",
        "hsl(0 101% 50%)",
        "lab(101 0 0)",
        "lch(50 231 0)",
        "oklab(0.5 0.41 0)",
        "device-cmyk(0 0 0 110%)",
    ];
    for input in range_errors {
        assert!(matches!(parse(input), Err(Error::Range { .. })), "{input}");
    }
}

#[test]
fn non_finite_channels_are_range_errors() {
    // Too many digits to fit in a float.
    let huge = format!("1{}", "0".repeat(400));

    let hue = format!("lch(50 10 {huge})");
    assert!(
        matches!(parse(&hue), Err(Error::Range { channel: "hue", value, .. }) if value.is_infinite()),
        "{hue}"
    );

    let red = format!("rgb({huge} 0 0)");
    assert!(
        matches!(parse(&red), Err(Error::Range { channel: "red", value, .. }) if value.is_infinite()),
        "{red}"
    );
}

#[test]
fn domain_corners_serialize_inside_every_domain() {
    let corners = [
        "oklch(1 0.4 0)",
        "oklch(0.5 0.4 145)",
        "oklab(0 0.4 0.4)",
        "oklab(1 -0.4 -0.4)",
        "lab(100 -128 128)",
        "lab(0 128 -128)",
        "lch(50 230 0)",
        "lch(100 230 270)",
    ];

    for input in corners {
        let color = parse(input).unwrap();
        for format in Format::ALL {
            let serialized = color.to_format(format);
            // Named output falls back to hex for unnamed colors.
            let valid = format.validate(&serialized)
                || (format == Format::Named && Format::Hex.validate(&serialized));
            assert!(valid, "{input} as {format}: {serialized}");
            assert!(parse(&serialized).is_ok(), "{input} as {format}: {serialized}");
        }
    }
}

#[test]
fn display_and_from_str() {
    let color: Color = "oklch(62.796% 0.25768 29.234)".parse().unwrap();
    assert_eq!(color.format(), Format::Oklch);
    assert_eq!(color.to_format(Format::Hex), "#ff0000");
    assert_eq!(color.to_string(), color.to_format(Format::Oklch));
}
