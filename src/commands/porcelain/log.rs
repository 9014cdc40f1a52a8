use crate::CommitDisplayFormat;
use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use colored::Colorize;

#[derive(Debug, Clone)]
pub struct LogOptions {
    pub branch: Option<String>,
    pub oneline: bool,
    pub abbrev_commit: bool,
    pub format: CommitDisplayFormat,
    pub first_parent: bool,
}

impl Repository {
    pub fn log(&self, opts: &LogOptions) -> anyhow::Result<()> {
        let graph = self.history(opts.branch.as_deref())?;

        // Newest first; --first-parent keeps only the mainline
        let commits = if opts.first_parent {
            graph.mainline()
        } else {
            graph.by_date()
        };

        for commit in commits {
            self.display_commit(commit, opts)?;
        }

        Ok(())
    }

    pub fn display_commit(&self, commit: &Commit, opts: &LogOptions) -> anyhow::Result<()> {
        if opts.oneline {
            return self.show_commit_oneline(commit, true);
        }

        match opts.format {
            CommitDisplayFormat::Medium => {
                self.show_commit_medium(commit, opts.abbrev_commit)?;
                writeln!(self.writer())?;
            }
            CommitDisplayFormat::OneLine => {
                self.show_commit_oneline(commit, opts.abbrev_commit)?;
            }
        }

        Ok(())
    }

    fn show_commit_medium(&self, commit: &Commit, abbrev_commit: bool) -> anyhow::Result<()> {
        let mut writer = self.writer();

        writeln!(
            writer,
            "commit {}",
            abbrev_commit_id(commit, abbrev_commit).yellow()
        )?;
        if commit.is_merge() {
            let parents = commit
                .parents()
                .iter()
                .map(|parent| parent.to_short_oid())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(writer, "Merge: {}", parents)?;
        }
        writeln!(writer, "Author: {}", commit.author().display_name())?;
        writeln!(writer, "Date:   {}", commit.author().readable_timestamp())?;
        writeln!(writer)?;
        for message_line in commit.message().lines() {
            writeln!(writer, "    {}", message_line)?;
        }

        Ok(())
    }

    fn show_commit_oneline(&self, commit: &Commit, abbrev_commit: bool) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{} {}",
            abbrev_commit_id(commit, abbrev_commit).yellow(),
            commit.short_message()
        )?;

        Ok(())
    }
}

fn abbrev_commit_id(commit: &Commit, abbrev_commit: bool) -> String {
    if abbrev_commit {
        commit.short_oid()
    } else {
        commit.oid().to_string()
    }
}
