//! Fixed YYC3-Menu documentation taxonomy.
//!
//! # Responsibility
//! - Define the compiled-in stage → category → title table.
//! - Keep naming constants (root dir, project prefix, labels) in one place.
//!
//! # Invariants
//! - Stage and category order is significant and must not change between
//!   releases; the 1-based title position drives the file-name prefix.
//! - Titles are unique within their (stage, category) pair.
//! - All values are `'static`; the taxonomy is never mutated at runtime.

/// Directory created (or reused) under the working directory.
pub const ROOT_DIR: &str = "docs";

/// Fixed token embedded in every generated file name.
pub const PROJECT_PREFIX: &str = "YYC3-Menu";

/// Standards label written into every document header.
pub const STANDARDS_LABEL: &str = "五高五标五化要求";

/// Version label written into every document header.
pub const VERSION_LABEL: &str = "V1.0";

/// Architecture-type document category.
pub const CATEGORY_ARCHITECTURE: &str = "架构类";

/// Technique-type document category.
pub const CATEGORY_TECHNIQUE: &str = "技巧类";

/// One document category inside a stage, with its ordered title list.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    /// Category directory name, also embedded in file names.
    pub name: &'static str,
    /// Document titles in prefix order (position 1 becomes `01-`).
    pub titles: &'static [&'static str],
}

/// One lifecycle stage and its ordered categories.
#[derive(Debug, Clone, Copy)]
pub struct Stage {
    /// Stage directory name.
    pub name: &'static str,
    /// Categories in creation order.
    pub categories: &'static [Category],
}

/// Full seven-stage document taxonomy, in creation order.
pub const STAGES: &[Stage] = &[
    Stage {
        name: "YYC3-Menu-需求规划",
        categories: &[
            Category {
                name: CATEGORY_ARCHITECTURE,
                titles: &[
                    "智能化应用业务架构说明书",
                    "需求阶段架构可行性分析报告",
                    "数据架构需求规划文档",
                    "智能化能力需求规格说明书",
                ],
            },
            Category {
                name: CATEGORY_TECHNIQUE,
                titles: &[
                    "需求文档标准化编写指南",
                    "跨部门需求协同沟通技巧手册",
                    "智能化需求优先级排序方法",
                ],
            },
        ],
    },
    Stage {
        name: "YYC3-Menu-架构设计",
        categories: &[
            Category {
                name: CATEGORY_ARCHITECTURE,
                titles: &[
                    "总体架构设计文档",
                    "微服务架构设计文档",
                    "数据架构详细设计文档",
                    "接口架构设计文档",
                    "安全架构设计文档",
                    "智能架构设计文档",
                    "部署架构设计文档",
                    "架构决策记录（ADR）集",
                ],
            },
            Category {
                name: CATEGORY_TECHNIQUE,
                titles: &[
                    "架构设计绘图规范与工具指南",
                    "微服务拆分避坑指南",
                    "AI架构集成性能优化技巧",
                    "架构评审 Checklist",
                ],
            },
        ],
    },
    Stage {
        name: "YYC3-Menu-开发实施",
        categories: &[
            Category {
                name: CATEGORY_ARCHITECTURE,
                titles: &[
                    "代码架构实现说明书",
                    "API接口实现文档",
                    "数据访问层架构实现文档",
                    "中间件集成架构文档",
                    "AI模型开发与集成文档",
                ],
            },
            Category {
                name: CATEGORY_TECHNIQUE,
                titles: &[
                    "编码规范手册",
                    "版本控制最佳实践",
                    "开发效率提升技巧集",
                    "常见开发架构问题解决方案",
                    "AI模型开发调优技巧",
                ],
            },
        ],
    },
    Stage {
        name: "YYC3-Menu-测试验证",
        categories: &[
            Category {
                name: CATEGORY_ARCHITECTURE,
                titles: &[
                    "测试架构设计文档",
                    "性能测试架构文档",
                    "安全测试架构文档",
                    "AI专项测试架构文档",
                ],
            },
            Category {
                name: CATEGORY_TECHNIQUE,
                titles: &[
                    "测试用例设计技巧手册",
                    "自动化测试脚本编写指南",
                    "性能测试调优技巧",
                    "测试缺陷管理规范与技巧",
                    "AI测试数据准备与标注技巧",
                ],
            },
        ],
    },
    Stage {
        name: "YYC3-Menu-部署发布",
        categories: &[
            Category {
                name: CATEGORY_ARCHITECTURE,
                titles: &[
                    "部署架构实施文档",
                    "CI_CD流水线架构文档",
                    "多环境部署架构差异文档",
                    "灰度发布架构设计文档",
                ],
            },
            Category {
                name: CATEGORY_TECHNIQUE,
                titles: &[
                    "Docker容器化部署技巧",
                    "K8s部署运维技巧",
                    "CI_CD流水线搭建与优化技巧",
                    "部署问题排查指南",
                    "灰度发布风险控制技巧",
                ],
            },
        ],
    },
    Stage {
        name: "YYC3-Menu-运维运营",
        categories: &[
            Category {
                name: CATEGORY_ARCHITECTURE,
                titles: &[
                    "运维架构设计文档",
                    "智能运维架构文档",
                    "灾备架构运维文档",
                    "系统扩容架构文档",
                ],
            },
            Category {
                name: CATEGORY_TECHNIQUE,
                titles: &[
                    "运维手册",
                    "监控告警配置技巧",
                    "日志分析与问题定位技巧",
                    "智能运维平台操作指南",
                    "灾备演练与恢复技巧",
                    "系统性能优化运维技巧",
                ],
            },
        ],
    },
    Stage {
        name: "YYC3-Menu-归类迭代",
        categories: &[
            Category {
                name: CATEGORY_ARCHITECTURE,
                titles: &[
                    "项目文档归档架构说明",
                    "系统迭代架构规划文档",
                    "架构资产沉淀文档",
                ],
            },
            Category {
                name: CATEGORY_TECHNIQUE,
                titles: &[
                    "文档归档规范与技巧",
                    "架构评审与迭代规划技巧",
                    "知识复用与沉淀技巧",
                ],
            },
        ],
    },
];

/// Total number of document titles across all stages and categories.
pub fn total_document_count(stages: &[Stage]) -> usize {
    stages
        .iter()
        .flat_map(|stage| stage.categories.iter())
        .map(|category| category.titles.len())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::{total_document_count, STAGES};

    #[test]
    fn taxonomy_has_seven_stages() {
        assert_eq!(STAGES.len(), 7);
    }

    #[test]
    fn every_stage_has_some_titles() {
        for stage in STAGES {
            assert!(
                total_document_count(&[*stage]) > 0,
                "stage {} has no titles",
                stage.name
            );
        }
    }
}
