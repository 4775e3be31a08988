//! Default template bodies
//!
//! Template content is data: plain text with handlebars placeholders, no
//! logic and no side effects. The bodies below produce a host-application
//! module skeleton in the host's PHP dialect; a `template_dir` override in
//! the configuration replaces any of them without recompiling.

/// Placeholder page served from the module's published assets.
pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>{{module_name}}</title>
</head>
<body>
    <!-- Placeholder page for the {{module_id_lower}} module assets. -->
</body>
</html>
"#;

/// Asset bundle declaration (`Assets.php`).
pub const ASSETS_PHP: &str = r"<?php

namespace {{module_namespace}};

use yii\web\AssetBundle;

/**
 * Asset bundle of the {{module_id_lower}} module.
 *
 * @author {{author}}
 */
class Assets extends AssetBundle
{
    /**
     * @inheritdoc
     */
    public $sourcePath = '@{{module_namespace_path}}/assets';
}
";

/// Module configuration stub (`config.php`).
pub const CONFIG_PHP: &str = r"<?php

use {{module_namespace}}\Events;

return [
    'id' => '{{module_id_lower}}',
    'class' => '{{module_class}}',
    'namespace' => '{{module_namespace}}',
    'events' => [
        ['class' => '{{module_class}}', 'event' => 'afterInit', 'callback' => [Events::class, 'onModuleInit']],
    ],
];
";

/// Event-hook registration stub (`Events.php`).
pub const EVENTS_PHP: &str = r"<?php

namespace {{module_namespace}};

/**
 * Event handlers of the {{module_id_lower}} module.
 *
 * @author {{author}}
 */
class Events
{
    /**
     * Called after the module has been initialized.
     *
     * @param \yii\base\Event $event
     */
    public static function onModuleInit($event)
    {
        // Register menu entries and listeners here.
    }
}
";

/// Module manifest (`module.json`).
pub const MODULE_JSON: &str = r#"{
    "id": "{{module_id_lower}}",
    "name": "{{module_name}}",
    "description": "{{module_description}}",
    "author": "{{author}}",
    "keywords": [],
    "version": "{{version}}"
}
"#;

/// Module root class (`Module.php`).
pub const MODULE_PHP: &str = r"<?php

namespace {{module_namespace}};

/**
 * {{module_description}}
 *
 * @author {{author}}
 */
class {{module_class_name}} extends \yii\base\Module
{
    /**
     * @inheritdoc
     */
    public $controllerNamespace = '{{controller_namespace}}';

    /**
     * @inheritdoc
     */
    public function init()
    {
        parent::init();
    }
}
";

/// Default controller with an `index` action.
pub const CONTROLLER_PHP: &str = r"<?php

namespace {{controller_namespace}};

use yii\web\Controller;

/**
 * Default controller of the {{module_id_lower}} module.
 *
 * @author {{author}}
 */
class {{controller_class}} extends Controller
{
    /**
     * Renders the index view of the module.
     *
     * @return string
     */
    public function actionIndex()
    {
        return $this->render('index');
    }
}
";

/// View template for the controller's `index` action.
pub const VIEW_PHP: &str = r#"<?php
/* @var $this \yii\web\View */
?>
<div class="panel panel-default">
    <div class="panel-heading">{{module_name}}</div>
    <div class="panel-body">
        <p>This is the index view of the <strong>{{module_id_lower}}</strong> module.</p>
        <p>It is rendered by <code>{{controller_namespace}}\{{controller_class}}</code>.</p>
    </div>
</div>
"#;
