//! Built-in dangerous-command catalog
//!
//! Pre-authored deny rules for commands that can destroy data or take the
//! machine down. Opt-in via `--deny-danger`; the catalog is appended after
//! user-supplied rules, so user rules keep precedence under first-match-wins.

use crate::rules::DenyRule;

/// A catalog entry: a literal pattern and the message reported on block
#[derive(Debug, Clone, Copy)]
pub struct CatalogRule {
    pub pattern: &'static str,
    pub message: &'static str,
}

impl CatalogRule {
    pub const fn new(pattern: &'static str, message: &'static str) -> Self {
        Self { pattern, message }
    }
}

/// Dangerous-command catalog, grouped by the kind of damage done
pub const DANGEROUS_COMMANDS: &[CatalogRule] = &[
    // File system destruction
    CatalogRule::new(
        "rm -rf",
        "rm -rf can recursively delete files and directories without confirmation",
    ),
    CatalogRule::new(
        "rm -fr",
        "rm -fr can recursively delete files and directories without confirmation",
    ),
    CatalogRule::new(
        "rm -Rf",
        "rm -Rf can recursively delete files and directories without confirmation",
    ),
    CatalogRule::new(
        "rm -fR",
        "rm -fR can recursively delete files and directories without confirmation",
    ),
    // Disk operations
    CatalogRule::new("dd if=", "dd can overwrite disk data and cause data loss"),
    CatalogRule::new("dd of=", "dd can overwrite disk data and cause data loss"),
    CatalogRule::new("mkfs", "mkfs formats file systems and will destroy all data"),
    CatalogRule::new(
        "mke2fs",
        "mke2fs creates ext2/3/4 file systems and will destroy all data",
    ),
    CatalogRule::new(
        "mkfs.ext",
        "mkfs.ext* creates ext file systems and will destroy all data",
    ),
    CatalogRule::new(
        "mkfs.xfs",
        "mkfs.xfs creates XFS file systems and will destroy all data",
    ),
    CatalogRule::new(
        "mkfs.btrfs",
        "mkfs.btrfs creates Btrfs file systems and will destroy all data",
    ),
    CatalogRule::new(
        "mkfs.vfat",
        "mkfs.vfat creates FAT file systems and will destroy all data",
    ),
    CatalogRule::new(
        "mkfs.ntfs",
        "mkfs.ntfs creates NTFS file systems and will destroy all data",
    ),
    // Partition and disk management
    CatalogRule::new("fdisk", "fdisk can modify disk partitions and cause data loss"),
    CatalogRule::new("parted", "parted can modify disk partitions and cause data loss"),
    CatalogRule::new("gdisk", "gdisk can modify GPT partitions and cause data loss"),
    CatalogRule::new("sfdisk", "sfdisk can modify disk partitions and cause data loss"),
    // Data wiping
    CatalogRule::new("shred", "shred overwrites files to make recovery difficult"),
    CatalogRule::new("wipefs", "wipefs can remove filesystem signatures"),
    CatalogRule::new("blkdiscard", "blkdiscard can discard device sectors"),
    // Dangerous redirections
    CatalogRule::new("> /dev/sda", "Writing directly to disk devices can destroy data"),
    CatalogRule::new("> /dev/hd", "Writing directly to disk devices can destroy data"),
    CatalogRule::new("> /dev/sd", "Writing directly to disk devices can destroy data"),
    CatalogRule::new("> /dev/nvme", "Writing directly to disk devices can destroy data"),
    // System file modifications
    CatalogRule::new(
        "> /etc/passwd",
        "Modifying system authentication files can lock you out",
    ),
    CatalogRule::new(
        "> /etc/shadow",
        "Modifying system authentication files can lock you out",
    ),
    CatalogRule::new(
        "> /etc/sudoers",
        "Modifying sudo configuration can lock you out of admin access",
    ),
    CatalogRule::new("> /boot/", "Modifying boot files can make system unbootable"),
    // Fork bombs and resource exhaustion
    CatalogRule::new(":(){:|:&};:", "Fork bomb that will crash the system"),
    CatalogRule::new(":(){ :|:& };:", "Fork bomb that will crash the system"),
    CatalogRule::new("bomb()", "Potential fork bomb or resource exhaustion attack"),
    // Dangerous chmod operations
    CatalogRule::new(
        "chmod -R 777",
        "Making everything world-writable is a security risk",
    ),
    CatalogRule::new(
        "chmod 777 /",
        "Making root directory world-writable is extremely dangerous",
    ),
    CatalogRule::new(
        "chmod -R 000",
        "Removing all permissions can make files inaccessible",
    ),
    // Dangerous chown operations
    CatalogRule::new(
        "chown -R",
        "Recursive ownership changes can break system permissions",
    ),
    CatalogRule::new(
        "chown root:root /",
        "Changing root directory ownership can break the system",
    ),
    // Package manager dangers
    CatalogRule::new(
        "apt-get remove --force",
        "Force removing packages can break dependencies",
    ),
    CatalogRule::new(
        "yum remove -y kernel",
        "Removing kernel packages can make system unbootable",
    ),
    CatalogRule::new("dnf remove -y systemd", "Removing systemd will break the system"),
    CatalogRule::new(
        "pacman -Rdd",
        "Removing packages ignoring dependencies can break the system",
    ),
    // Dangerous curl/wget operations
    CatalogRule::new("| sudo bash", "Piping untrusted scripts to sudo bash is dangerous"),
    CatalogRule::new("| sudo sh", "Piping untrusted scripts to sudo sh is dangerous"),
    // Memory and system operations
    CatalogRule::new(
        "/dev/mem",
        "Direct memory access can crash the system or expose sensitive data",
    ),
    CatalogRule::new("/dev/kmem", "Kernel memory access can crash the system"),
    CatalogRule::new("/dev/port", "Direct port access can damage hardware"),
    // Dangerous kill operations
    CatalogRule::new("kill -9 -1", "Killing all processes can crash the system"),
    CatalogRule::new(
        "killall -9",
        "Force killing all instances of a process can cause instability",
    ),
    CatalogRule::new(
        "pkill -9 -f",
        "Force killing by pattern can terminate critical processes",
    ),
    // Infinite loops and hangs
    CatalogRule::new("while true; do", "Infinite loops can consume resources"),
    CatalogRule::new("yes | ", "Piping yes to commands can cause unexpected behavior"),
    // Network dangers
    CatalogRule::new("iptables -F", "Flushing firewall rules can expose the system"),
    CatalogRule::new("iptables --flush", "Flushing firewall rules can expose the system"),
    CatalogRule::new("ufw disable", "Disabling firewall can expose the system"),
    // Backup and sync dangers
    CatalogRule::new("rsync --delete /", "Rsync with delete on root can destroy data"),
    CatalogRule::new(
        "tar -czf / ",
        "Creating archives of root filesystem can fill disk",
    ),
    // Database operations
    CatalogRule::new("DROP DATABASE", "Dropping databases destroys all data"),
    CatalogRule::new("TRUNCATE TABLE", "Truncating tables removes all data"),
    CatalogRule::new("mysql -e \"DROP", "Database drop commands destroy data"),
    CatalogRule::new("psql -c \"DROP", "Database drop commands destroy data"),
    // Dangerous find operations
    CatalogRule::new("find / -delete", "Finding and deleting from root is dangerous"),
    CatalogRule::new("find / -exec rm", "Finding and removing from root is dangerous"),
    CatalogRule::new(
        "find . -delete",
        "Finding and deleting files can remove important data",
    ),
    CatalogRule::new(
        "find / -name \"*\" -exec",
        "Finding and executing commands on all files is dangerous",
    ),
    CatalogRule::new("xargs rm", "Piping to xargs rm can delete many files at once"),
    // Systemctl dangers
    CatalogRule::new(
        "systemctl stop sshd",
        "Stopping SSH can lock you out of remote systems",
    ),
    CatalogRule::new(
        "systemctl disable sshd",
        "Disabling SSH can lock you out of remote systems",
    ),
    CatalogRule::new("systemctl mask", "Masking services can prevent them from starting"),
    // Format commands
    CatalogRule::new("format c:", "Format commands destroy all data on drives"),
    CatalogRule::new("format /", "Format commands destroy all data on drives"),
    // Git destructive operations
    CatalogRule::new(
        "git push --force",
        "Force push can overwrite remote history and cause data loss",
    ),
    CatalogRule::new(
        "git push -f",
        "Force push can overwrite remote history and cause data loss",
    ),
    CatalogRule::new(
        "git push --force-with-lease",
        "Force push can overwrite remote history",
    ),
    CatalogRule::new(
        "git reset --hard HEAD",
        "Hard reset discards all uncommitted changes permanently",
    ),
    CatalogRule::new("git reset --hard", "Hard reset discards all changes permanently"),
    CatalogRule::new(
        "git clean -fdx",
        "Removes all untracked files and directories permanently",
    ),
    CatalogRule::new(
        "git clean -ffdx",
        "Force removes all untracked files and directories permanently",
    ),
    CatalogRule::new("git branch -D", "Force deletes branch and its commits may be lost"),
    CatalogRule::new(
        "git branch --delete --force",
        "Force deletes branch and its commits may be lost",
    ),
    CatalogRule::new(
        "git filter-branch",
        "Rewrites Git history and can cause data loss",
    ),
    CatalogRule::new("git filter-repo", "Rewrites Git history and can cause data loss"),
    CatalogRule::new(
        "git rebase -i",
        "Interactive rebase can rewrite history and cause conflicts",
    ),
    CatalogRule::new(
        "git rebase --interactive",
        "Interactive rebase can rewrite history and cause conflicts",
    ),
    CatalogRule::new("git push origin --delete", "Deletes remote branch permanently"),
    CatalogRule::new("git push origin :", "Deletes remote branch permanently"),
    CatalogRule::new(
        "git reflog expire --expire=now --all",
        "Expires all reflog entries, making recovery impossible",
    ),
    CatalogRule::new(
        "git gc --prune=now",
        "Immediately prunes unreachable objects, making recovery difficult",
    ),
    CatalogRule::new(
        "git remote prune",
        "Removes references to deleted remote branches",
    ),
    CatalogRule::new(
        "git fetch --prune",
        "Removes references to deleted remote branches",
    ),
    CatalogRule::new(
        "git checkout -B",
        "Force creates branch, potentially overwriting existing branch",
    ),
    CatalogRule::new(
        "git merge --abort",
        "Aborts merge and may lose merge resolution work",
    ),
    CatalogRule::new("git rebase --abort", "Aborts rebase and may lose rebase work"),
    CatalogRule::new("git cherry-pick --abort", "Aborts cherry-pick and may lose work"),
    CatalogRule::new("git stash drop", "Permanently deletes stashed changes"),
    CatalogRule::new("git stash clear", "Permanently deletes all stashed changes"),
    CatalogRule::new("git update-ref -d", "Deletes Git references directly"),
    CatalogRule::new(
        "git symbolic-ref",
        "Can modify Git references in dangerous ways",
    ),
    CatalogRule::new("rm -rf .git", "Deletes entire Git repository history"),
    CatalogRule::new("rm .git/index", "Deletes Git index, corrupting repository"),
    CatalogRule::new(
        "> .git/",
        "Writing directly to .git directory can corrupt repository",
    ),
    // Other dangerous operations
    CatalogRule::new("hdparm", "hdparm can modify disk parameters and cause data loss"),
    CatalogRule::new(
        "badblocks -w",
        "Write-mode badblocks testing destroys all data",
    ),
    CatalogRule::new("> /proc/", "Writing to /proc can crash or misconfigure the system"),
    CatalogRule::new("> /sys/", "Writing to /sys can crash or misconfigure the system"),
    CatalogRule::new(
        "echo 1 > /proc/sys/kernel/sysrq",
        "Enabling SysRq can allow dangerous system operations",
    ),
    CatalogRule::new("init 0", "init 0 will shut down the system"),
    CatalogRule::new("shutdown -h now", "This will shut down the system immediately"),
    CatalogRule::new("poweroff", "This will power off the system"),
    CatalogRule::new("halt", "This will halt the system"),
    CatalogRule::new("reboot -f", "Force reboot can cause data loss"),
    // Additional file operations
    CatalogRule::new("mv / ", "Moving root directory can break the system"),
    CatalogRule::new("mv /* ", "Moving all root contents can break the system"),
    CatalogRule::new("cp /dev/zero", "Copying from /dev/zero can fill disk space"),
    CatalogRule::new("cp /dev/urandom", "Copying from /dev/urandom can fill disk space"),
    CatalogRule::new("truncate -s 0", "Truncating files to zero size destroys content"),
    // Dangerous sed/awk operations
    CatalogRule::new(
        "sed -i '' -e",
        "In-place sed without backup can permanently modify files",
    ),
    CatalogRule::new(
        "sed -i -e",
        "In-place sed without backup can permanently modify files",
    ),
    CatalogRule::new("awk -i inplace", "In-place awk can permanently modify files"),
    // Homebrew dangers
    CatalogRule::new(
        "brew uninstall --force",
        "Force uninstalling can break dependencies",
    ),
];

/// Materialize the catalog as deny rules for the engine
pub fn dangerous_rules() -> Vec<DenyRule> {
    DANGEROUS_COMMANDS
        .iter()
        .map(|entry| DenyRule::with_message(entry.pattern, entry.message))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_entry_has_pattern_and_message() {
        for entry in DANGEROUS_COMMANDS {
            assert!(!entry.pattern.is_empty());
            assert!(
                entry.message.len() > 10,
                "message too short for pattern {:?}",
                entry.pattern
            );
        }
    }

    #[test]
    fn test_no_duplicate_patterns() {
        let patterns: HashSet<&str> = DANGEROUS_COMMANDS.iter().map(|e| e.pattern).collect();
        assert_eq!(patterns.len(), DANGEROUS_COMMANDS.len());
    }

    #[test]
    fn test_dangerous_rules_preserve_catalog_order() {
        let rules = dangerous_rules();
        assert_eq!(rules.len(), DANGEROUS_COMMANDS.len());
        assert_eq!(rules[0].pattern, DANGEROUS_COMMANDS[0].pattern);
        assert_eq!(
            rules[0].message.as_deref(),
            Some(DANGEROUS_COMMANDS[0].message)
        );
    }
}
