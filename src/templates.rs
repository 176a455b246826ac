//! Static files written into a fresh target directory by `init`.

/// Replace every `{{key}}` in `template` with its value
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut output = template.to_string();
    for (key, value) in vars {
        output = output.replace(&format!("{{{{{key}}}}}"), value);
    }
    output
}

pub const TYPES_INDEX: &str = r#"export type ImagePaths = {
  lightMode: string;
  darkMode: string;
};

export type ComponentProps = {
  className?: string;
  size?: number;
  width?: number;
  height?: number;
  alt?: string;
};

export { TokenSymbol } from "./TokenSymbol";
export { WalletName } from "./WalletName";
export { SystemName } from "./SystemName";
"#;

pub const IMAGE_PATHS_PREAMBLE: &str = r#"import { ImagePaths } from "../types";

"#;

pub const BARREL_INDEX: &str = r#"export { CryptoIcon } from "./CryptoIcon";
export { iconMap } from "./constants/imagePaths";
export * from "./types";
"#;

/// `{{DARK_CLASS}}` is the configured dark-mode class
pub const NEXT_COMPONENT: &str = r#""use client";

import Image from "next/image";
import { iconMap } from "./constants/imagePaths";
import { ComponentProps, SystemName, TokenSymbol, WalletName } from "./types";

type CryptoIconProps = ComponentProps & {
  name: TokenSymbol | WalletName | SystemName | string;
};

export function CryptoIcon({ name, className = "", size = 24, width, height, alt }: CryptoIconProps) {
  const paths = iconMap[name];
  if (!paths) {
    return null;
  }

  const finalWidth = width ?? size;
  const finalHeight = height ?? size;

  return (
    <>
      <Image
        src={paths.lightMode}
        alt={alt ?? name}
        width={finalWidth}
        height={finalHeight}
        className={`{{DARK_CLASS}}:hidden ${className}`}
      />
      <Image
        src={paths.darkMode}
        alt={alt ?? name}
        width={finalWidth}
        height={finalHeight}
        className={`hidden {{DARK_CLASS}}:block ${className}`}
      />
    </>
  );
}
"#;

pub const VITE_COMPONENT: &str = r#"import { iconMap } from "./constants/imagePaths";
import { ComponentProps, SystemName, TokenSymbol, WalletName } from "./types";

type CryptoIconProps = ComponentProps & {
  name: TokenSymbol | WalletName | SystemName | string;
};

export function CryptoIcon({ name, className = "", size = 24, width, height, alt }: CryptoIconProps) {
  const paths = iconMap[name];
  if (!paths) {
    return null;
  }

  const finalWidth = width ?? size;
  const finalHeight = height ?? size;

  return (
    <>
      <img
        src={paths.lightMode}
        alt={alt ?? name}
        width={finalWidth}
        height={finalHeight}
        className={`{{DARK_CLASS}}:hidden ${className}`}
      />
      <img
        src={paths.darkMode}
        alt={alt ?? name}
        width={finalWidth}
        height={finalHeight}
        className={`hidden {{DARK_CLASS}}:block ${className}`}
      />
    </>
  );
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_replaces_every_occurrence() {
        let out = render(NEXT_COMPONENT, &[("DARK_CLASS", "night")]);
        assert!(out.contains("`night:hidden ${className}`"));
        assert!(out.contains("`hidden night:block ${className}`"));
        assert!(!out.contains("{{"));
    }
}
