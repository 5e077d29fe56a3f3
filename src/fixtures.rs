//! openssl-generated keys shared by the unit tests.

pub const RSA2048_PRIVATE_PEM: &str = include_str!("../testdata/rsa2048_private.pem");
pub const RSA2048_PUBLIC_PEM: &str = include_str!("../testdata/rsa2048_public.pem");
pub const RSA4096_PRIVATE_PEM: &str = include_str!("../testdata/rsa4096_private.pem");
pub const RSA4096_PUBLIC_PEM: &str = include_str!("../testdata/rsa4096_public.pem");
pub const RSA1024_PUBLIC_PEM: &str = include_str!("../testdata/rsa1024_public.pem");

/// `sha256sum testdata/rsa2048_public.pem`
pub const RSA2048_PUBLIC_FINGERPRINT: &str =
    "59c757bf015aff2c873219ebb1bb6fb3ed83e5166c162b755f1b9ef16fd4f2d4";

/// `printf 'hello,world' | openssl dgst -sha256 -sign testdata/rsa2048_private.pem | base64 -w0`
pub const HELLO_WORLD_SIGNATURE_B64: &str = "Y7uyxopulmR6d551Xo8FKhIHD85Ek0vyk6dQ/XgCsSJ1IsIlyx/Pu3vP0e0eY4PwrENwJMwjtEi10WsITGTjQea/GEx6sQ7COl6EEwZUF92J4TiTWqTve6LxeNb8iL7VzNdFBKX4x8NayMXwefgpjfR4Tpa/YO7Wxb7m4GdjJssHoqGt1sdrFI+cD4v7wWxdtY9yzasykWs7M6X2HcN050kczmzLa/ZBnjeGmMUwKgHpX7957jpKMHUO+O67iKBQbXMXfbnVazb16WajUOhkb7syLQg9d2wY7OATn7W67yZ9AvcHz7hWH6bhetEp8CLUsjA2CW/fGiqGimc2BPbjZA==";

pub const RSA8192_PRIVATE_PEM: &str = include_str!("../testdata/rsa8192_private.pem");
pub const RSA8192_PUBLIC_PEM: &str = include_str!("../testdata/rsa8192_public.pem");

/// Same as [`HELLO_WORLD_SIGNATURE_B64`], signed with `testdata/rsa8192_private.pem`.
pub const RSA8192_HELLO_WORLD_SIGNATURE_B64: &str =
    include_str!("../testdata/rsa8192_hello_world.sig.b64");
