use std::path::Path;

use log::{debug, info};

use crate::{
    alias_normalizer::{normalize_alias, strip_marker},
    alias_store::AliasMap,
};

/// Aliases derived from a single folder name.
pub fn generated_aliases_for_folder(folder_name: &str, marker: char) -> Vec<String> {
    let mut aliases = vec![
        folder_name.to_string(),
        normalize_alias(folder_name, marker),
    ];
    if let Some(stripped) = strip_marker(folder_name, marker) {
        aliases.push(normalize_alias(&stripped, marker));
        aliases.push(stripped);
    }
    aliases
}

/// Names of every directory below `root`, at any depth. The root itself is not
/// included and unreadable directories are skipped. Symlinks to directories are
/// listed but not descended into.
pub fn collect_folder_names(root: &Path) -> Vec<String> {
    let mut pending_directories = vec![root.to_path_buf()];
    let mut folder_names = Vec::new();

    while let Some(directory) = pending_directories.pop() {
        let entries = match std::fs::read_dir(&directory) {
            Ok(entries) => entries,
            Err(err) => {
                debug!("Failed to read directory {}: {}", directory.display(), err);
                continue;
            }
        };

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    debug!(
                        "Failed to read a directory entry in {}: {}",
                        directory.display(),
                        err
                    );
                    continue;
                }
            };

            let path = entry.path();
            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(err) => {
                    debug!("Failed to inspect {}: {}", path.display(), err);
                    continue;
                }
            };

            if file_type.is_dir() {
                folder_names.push(entry.file_name().to_string_lossy().to_string());
                pending_directories.push(path);
            } else if file_type.is_symlink() && path.is_dir() {
                folder_names.push(entry.file_name().to_string_lossy().to_string());
            }
        }
    }

    folder_names
}

/// Scans `media_root` and maps each folder name to its generated aliases.
/// A missing root contributes nothing.
pub fn scan_media_aliases(media_root: &Path, marker: char) -> AliasMap {
    let mut generated = AliasMap::new();
    if !media_root.exists() {
        debug!(
            "Media root {} does not exist. Skipping folder scan.",
            media_root.display()
        );
        return generated;
    }

    let folder_names = collect_folder_names(media_root);
    info!(
        "Scanned media folders. root={} folders={}",
        media_root.display(),
        folder_names.len()
    );
    for folder_name in folder_names {
        let aliases = generated_aliases_for_folder(&folder_name, marker);
        generated.entry(folder_name).or_default().extend(aliases);
    }
    generated
}

#[cfg(test)]
mod tests {
    use super::{collect_folder_names, generated_aliases_for_folder, scan_media_aliases};
    use std::collections::BTreeSet;
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    const MARKER: char = '호';

    fn unique_temp_dir(name: &str) -> PathBuf {
        let nonce = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be valid")
            .as_nanos();
        std::env::temp_dir().join(format!("media_aliases_{name}_{nonce}"))
    }

    fn alias_set(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn test_generated_aliases_include_marker_stripped_variants() {
        let aliases: BTreeSet<String> =
            generated_aliases_for_folder("로얄캐리비안 스펙트럼호", MARKER)
                .into_iter()
                .collect();

        assert_eq!(
            aliases,
            alias_set(&[
                "로얄캐리비안 스펙트럼호",
                "로얄캐리비안스펙트럼",
                "로얄캐리비안 스펙트럼",
            ])
        );
    }

    #[test]
    fn test_generated_aliases_without_marker_are_raw_and_normalized() {
        assert_eq!(
            generated_aliases_for_folder("스페인 바르셀로나", MARKER),
            vec!["스페인 바르셀로나".to_string(), "스페인바르셀로나".to_string()]
        );
    }

    #[test]
    fn test_generated_aliases_drop_interior_markers_from_stripped_name() {
        let aliases: BTreeSet<String> = generated_aliases_for_folder("호라이즌호", MARKER)
            .into_iter()
            .collect();

        assert_eq!(aliases, alias_set(&["호라이즌호", "호라이즌", "라이즌"]));
    }

    #[test]
    fn test_collect_folder_names_walks_nested_directories_only() {
        let root = unique_temp_dir("walk");
        fs::create_dir_all(root.join("스페인 바르셀로나").join("객실 사진"))
            .expect("should create nested dirs");
        fs::create_dir_all(root.join("대한민국 제주도")).expect("should create dir");
        fs::write(root.join("대한민국 제주도").join("photo.jpg"), b"jpg")
            .expect("should write file");

        let mut names = collect_folder_names(&root);
        names.sort();
        let _ = fs::remove_dir_all(&root);

        assert_eq!(
            names,
            vec![
                "객실 사진".to_string(),
                "대한민국 제주도".to_string(),
                "스페인 바르셀로나".to_string(),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_collect_folder_names_lists_directory_symlinks_without_descending() {
        let root = unique_temp_dir("symlink_root");
        let target = unique_temp_dir("symlink_target");
        fs::create_dir_all(root.join("real")).expect("should create dir");
        fs::create_dir_all(target.join("내부 폴더")).expect("should create target dirs");
        std::os::unix::fs::symlink(&target, root.join("링크 폴더"))
            .expect("should create symlink");

        let mut names = collect_folder_names(&root);
        names.sort();
        let _ = fs::remove_dir_all(&root);
        let _ = fs::remove_dir_all(&target);

        assert_eq!(names, vec!["real".to_string(), "링크 폴더".to_string()]);
    }

    #[test]
    fn test_scan_of_missing_root_is_empty() {
        let root = unique_temp_dir("absent");

        assert!(scan_media_aliases(&root, MARKER).is_empty());
    }

    #[test]
    fn test_scan_maps_each_folder_to_generated_aliases() {
        let root = unique_temp_dir("scan");
        fs::create_dir_all(root.join("로얄캐리비안 스펙트럼호").join("객실사진"))
            .expect("should create nested dirs");

        let generated = scan_media_aliases(&root, MARKER);
        let _ = fs::remove_dir_all(&root);

        assert_eq!(generated.len(), 2);
        assert_eq!(
            generated.get("로얄캐리비안 스펙트럼호"),
            Some(&alias_set(&[
                "로얄캐리비안 스펙트럼호",
                "로얄캐리비안스펙트럼",
                "로얄캐리비안 스펙트럼",
            ]))
        );
        assert_eq!(generated.get("객실사진"), Some(&alias_set(&["객실사진"])));
    }

    #[test]
    fn test_scan_unions_folders_sharing_a_name() {
        let root = unique_temp_dir("shared");
        fs::create_dir_all(root.join("퀀텀").join("사진")).expect("should create dirs");
        fs::create_dir_all(root.join("스펙트럼").join("사진")).expect("should create dirs");

        let generated = scan_media_aliases(&root, MARKER);
        let _ = fs::remove_dir_all(&root);

        assert_eq!(generated.len(), 3);
        assert_eq!(generated.get("사진"), Some(&alias_set(&["사진"])));
    }
}
