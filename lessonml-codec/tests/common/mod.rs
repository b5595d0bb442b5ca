//! Shared fixtures for the integration tests.

use once_cell::sync::Lazy;

/// A payload exercising every element of the dialect vocabulary.
pub static KITCHEN_SINK: Lazy<String> = Lazy::new(|| {
    [
        "<heading level=\"1\">Object Orientation</heading>",
        "<paragraph>Classes bundle state and behavior.</paragraph>",
        "<note>Everything here is an object.</note>",
        "<example title=\"Counter\">A class with one attribute.</example>",
        "<code language=\"python\"><![CDATA[\nclass Counter:\n    def __init__(self):\n        self.n = 0\n]]></code>",
        "<code-collection title=\"Hello\">\n  <snippet language=\"python\"><![CDATA[print(\"hi\")]]></snippet>\n  <snippet language=\"java\"><![CDATA[System.out.println(\"hi\");]]></snippet>\n</code-collection>",
        "<image alt=\"Diagram\" width=\"480px\">https://cdn.example/diagram.png</image>",
        "<carousel caption=\"Tour\">\n  <img alt=\"Step 1\">https://cdn.example/a.png</img>\n  <img>https://cdn.example/b.png</img>\n</carousel>",
        "<gallery caption=\"Screens\">\n  <img alt=\"Shot\">https://cdn.example/c.png</img>\n</gallery>",
    ]
    .join("\n\n")
});
